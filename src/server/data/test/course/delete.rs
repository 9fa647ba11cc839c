use super::*;

/// Tests deleting an existing course.
///
/// Verifies that the returned course holds the deleted row and that the row is gone.
///
/// Expected: Ok(Some(Course)), then get_by_id returns None
#[tokio::test]
async fn deletes_course_and_returns_it() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let deleted = repo.delete(created.id).await?.unwrap();

    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.name, created.name);
    assert!(repo.get_by_id(created.id).await?.is_none());

    let count = entity::prelude::Course::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests deleting a course that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let result = repo.delete(3).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that deleting one course leaves the others in place.
///
/// Expected: 5 of 6 sample courses remain
#[tokio::test]
async fn leaves_other_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    let repo = CourseRepository::new(db);
    repo.delete(3).await?;

    let count = entity::prelude::Course::find().count(db).await?;
    assert_eq!(count, 5);
    assert!(repo.get_by_id(2).await?.is_some());
    assert!(repo.get_by_id(4).await?.is_some());

    Ok(())
}
