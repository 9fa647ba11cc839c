//! Server-side domain models and operation parameters.
//!
//! These types sit between the HTTP DTOs in `crate::model` and the SeaORM entities.
//! Conversions to and from DTOs validate input; conversions from entities happen
//! only inside the data layer.

pub mod course;
