//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated server params, call exactly one
//! service method, and convert the result back into response DTOs. Each module
//! exposes a `routes()` function returning an `OpenApiRouter` so that the handlers
//! and their OpenAPI path items are registered together.

pub mod course;
pub mod fallback;
pub mod search;
