use super::*;

/// Tests creating a course with every field set.
///
/// Verifies that the repository inserts the row, assigns an ID and stamps both
/// timestamps with the same instant.
///
/// Expected: Ok(Course) with generated ID
#[tokio::test]
async fn creates_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParam {
            name: "Level one".to_string(),
            start_date: date("2021-04-04"),
            end_date: date("2023-12-22"),
            lectures: 37,
        })
        .await?;

    assert!(course.id >= 1);
    assert_eq!(course.name, "Level one");
    assert_eq!(course.start_date, date("2021-04-04"));
    assert_eq!(course.end_date, date("2023-12-22"));
    assert_eq!(course.lectures, 37);
    assert_eq!(course.created_at, course.updated_at);

    let count = entity::prelude::Course::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests creating a course whose name is already taken.
///
/// Verifies that the unique constraint on `name` surfaces as a database error.
///
/// Expected: Err(DbErr) and no second row
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .name("Level one")
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let result = repo
        .create(CreateCourseParam {
            name: "Level one".to_string(),
            start_date: date("2022-01-01"),
            end_date: date("2022-06-01"),
            lectures: 10,
        })
        .await;

    assert!(result.is_err());
    let count = entity::prelude::Course::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
