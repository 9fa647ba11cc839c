//! SeaORM entities for the course catalog database.

pub mod prelude;

pub mod course;
