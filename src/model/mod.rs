//! Request and response DTOs shared by the HTTP layer and the OpenAPI document.

pub mod api;
pub mod course;
pub mod date;
