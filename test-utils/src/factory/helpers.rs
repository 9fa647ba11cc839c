//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    factory::course::CourseFactory,
    fixture::course::{date, SAMPLE_CATALOG},
};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts the six sample courses in catalog order.
///
/// In a fresh table the returned courses have IDs 1 through 6.
///
/// # Returns
/// - `Ok(Vec<entity::course::Model>)` - Inserted courses in catalog order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_sample_catalog(
    db: &DatabaseConnection,
) -> Result<Vec<entity::course::Model>, DbErr> {
    let mut courses = Vec::with_capacity(SAMPLE_CATALOG.len());

    for (name, start, end, lectures) in SAMPLE_CATALOG {
        let course = CourseFactory::new(db)
            .name(name)
            .start_date(date(start))
            .end_date(date(end))
            .lectures(lectures)
            .build()
            .await?;
        courses.push(course);
    }

    Ok(courses)
}
