//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models and reference data for unit tests and as
//! default values for factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let course = fixture::course::entity();
//!
//! // Create with custom fields
//! let short = fixture::course::entity_builder()
//!     .lectures(3)
//!     .build();
//! ```

pub mod course;

pub use course::{entity as course_entity, entity_builder as course_entity_builder};
