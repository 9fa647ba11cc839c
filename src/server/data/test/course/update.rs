use super::*;

/// Tests replacing every field of a course.
///
/// Verifies that the new values are stored, `created_at` is preserved and
/// `updated_at` does not move backwards.
///
/// Expected: Ok(Some(Course)) with the new values
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let updated = repo
        .update(UpdateCourseParam {
            id: created.id,
            name: "Renamed".to_string(),
            start_date: date("2025-02-01"),
            end_date: date("2025-05-31"),
            lectures: 12,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.start_date, date("2025-02-01"));
    assert_eq!(updated.end_date, date("2025-05-31"));
    assert_eq!(updated.lectures, 12);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating a course that does not exist.
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
    let result = repo
        .update(UpdateCourseParam {
            id: 99,
            name: "Ghost".to_string(),
            start_date: date("2025-02-01"),
            end_date: date("2025-05-31"),
            lectures: 1,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests renaming a course to a name another course already has.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_renaming_to_existing_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .name("Taken")
        .build()
        .await?;
    let other = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let result = repo
        .update(UpdateCourseParam {
            id: other.id,
            name: "Taken".to_string(),
            start_date: other.start_date,
            end_date: other.end_date,
            lectures: other.lectures,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
