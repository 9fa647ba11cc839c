//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They work with server models rather than DTOs or entity models and translate
//! repository outcomes, such as a missing row or a duplicate key, into `AppError`s.

pub mod course;
