use super::*;

/// Tests getting an existing course by ID.
///
/// Expected: Ok(Some(Course)) with the stored fields
#[tokio::test]
async fn gets_existing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::course::CourseFactory::new(db)
        .name("Level two")
        .lectures(25)
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let course = repo.get_by_id(created.id).await?;

    assert!(course.is_some());
    let course = course.unwrap();
    assert_eq!(course.id, created.id);
    assert_eq!(course.name, "Level two");
    assert_eq!(course.lectures, 25);
    assert_eq!(course.start_date, created.start_date);
    assert_eq!(course.end_date, created.end_date);

    Ok(())
}

/// Tests getting a course that does not exist.
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
    let course = repo.get_by_id(42).await?;

    assert!(course.is_none());

    Ok(())
}
