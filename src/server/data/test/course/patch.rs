use super::*;

/// Tests patching a single field.
///
/// Verifies that only `lectures` changes and every other column keeps its value.
///
/// Expected: Ok(Some(Course)) with only lectures changed
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::course::CourseFactory::new(db)
        .name("Python forever!")
        .start_date(date("2021-06-07"))
        .end_date(date("2023-09-27"))
        .lectures(44)
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let patched = repo
        .patch(PatchCourseParam {
            id: created.id,
            name: None,
            start_date: None,
            end_date: None,
            lectures: Some(50),
        })
        .await?
        .unwrap();

    assert_eq!(patched.name, "Python forever!");
    assert_eq!(patched.start_date, date("2021-06-07"));
    assert_eq!(patched.end_date, date("2023-09-27"));
    assert_eq!(patched.lectures, 50);
    assert!(patched.updated_at >= created.updated_at);

    Ok(())
}

/// Tests patching with no fields at all.
///
/// Expected: Ok(Some(Course)) with unchanged values
#[tokio::test]
async fn empty_patch_keeps_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let patched = repo
        .patch(PatchCourseParam {
            id: created.id,
            name: None,
            start_date: None,
            end_date: None,
            lectures: None,
        })
        .await?
        .unwrap();

    assert_eq!(patched.name, created.name);
    assert_eq!(patched.start_date, created.start_date);
    assert_eq!(patched.end_date, created.end_date);
    assert_eq!(patched.lectures, created.lectures);
    assert_eq!(patched.created_at, created.created_at);

    Ok(())
}

/// Tests patching a course that does not exist.
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
        .patch(PatchCourseParam {
            id: 7,
            name: Some("Ghost".to_string()),
            start_date: None,
            end_date: None,
            lectures: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
