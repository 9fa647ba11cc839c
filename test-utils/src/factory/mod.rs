//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let course = factory::create_course(&db).await?;
//!
//!     // Insert the six-course sample catalog
//!     let catalog = factory::helpers::create_sample_catalog(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let course = factory::course::CourseFactory::new(&db)
//!     .name("Rust for beginners")
//!     .lectures(12)
//!     .build()
//!     .await?;
//! ```

pub mod course;
pub mod helpers;

pub use course::create_course;
pub use helpers::create_sample_catalog;
