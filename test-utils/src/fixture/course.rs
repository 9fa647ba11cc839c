//! Course fixtures for creating in-memory test data.
//!
//! Provides a default course entity model, a builder for customised models and the
//! six-course sample catalog used by the search tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use entity::course;

/// Default test course name.
pub const DEFAULT_NAME: &str = "Test Course";

/// Default start date.
pub const DEFAULT_START_DATE: &str = "2024-01-15";

/// Default end date.
pub const DEFAULT_END_DATE: &str = "2024-06-30";

/// Default number of lectures.
pub const DEFAULT_LECTURES: i32 = 24;

/// Sample catalog as `(name, start, end, lectures)`, inserted in this order so that
/// IDs 1 to 6 line up with the array index plus one.
pub const SAMPLE_CATALOG: [(&str, &str, &str, i32); 6] = [
    ("Level one", "2021-04-04", "2023-12-22", 37),
    ("The Python 3.10", "2021-08-19", "2022-04-21", 71),
    ("Level two", "2022-05-05", "2024-11-19", 25),
    ("Python forever!", "2021-06-07", "2023-09-27", 44),
    ("Level three", "2023-06-07", "2025-10-17", 19),
    ("What is the Python?", "2023-03-23", "2023-08-28", 17),
];

/// Parses a `YYYY-MM-DD` literal used in fixtures.
///
/// # Panics
/// Panics on a malformed literal, which is a bug in the test itself.
pub fn date(value: &str) -> NaiveDate {
    value
        .parse()
        .unwrap_or_else(|e| panic!("invalid fixture date '{}': {}", value, e))
}

fn default_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a course entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Course"`
/// - start_date: `2024-01-15`
/// - end_date: `2024-06-30`
/// - lectures: `24`
/// - created_at / updated_at: `2024-01-01T12:00:00Z`
pub fn entity() -> course::Model {
    entity_builder().build()
}

/// Creates a course entity builder for customization.
///
/// ```rust,ignore
/// let course = fixture::course::entity_builder()
///     .name("Rust for beginners")
///     .lectures(12)
///     .build();
/// ```
pub fn entity_builder() -> CourseEntityBuilder {
    CourseEntityBuilder::default()
}

/// Builder for creating customized course entity models.
pub struct CourseEntityBuilder {
    id: i32,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    lectures: i32,
    timestamp: DateTime<Utc>,
}

impl Default for CourseEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            start_date: date(DEFAULT_START_DATE),
            end_date: date(DEFAULT_END_DATE),
            lectures: DEFAULT_LECTURES,
            timestamp: default_timestamp(),
        }
    }
}

impl CourseEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn lectures(mut self, lectures: i32) -> Self {
        self.lectures = lectures;
        self
    }

    /// Builds and returns the course entity model.
    pub fn build(self) -> course::Model {
        course::Model {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            lectures: self.lectures,
            created_at: self.timestamp,
            updated_at: self.timestamp,
        }
    }
}
