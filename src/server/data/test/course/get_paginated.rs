use super::*;

/// Tests the first page of a catalog larger than one page.
///
/// Verifies that courses come back ordered by ID and that the total counts every row.
///
/// Expected: Ok((first 4 courses, 6))
#[tokio::test]
async fn gets_first_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    let repo = CourseRepository::new(db);
    let param = GetPaginatedCoursesParam::new(0, 4).unwrap();
    let (courses, total) = repo.get_paginated(&param).await?;

    assert_eq!(total, 6);
    let ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    Ok(())
}

/// Tests the last, partially filled page.
///
/// Expected: Ok((remaining 2 courses, 6))
#[tokio::test]
async fn gets_last_partial_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    let repo = CourseRepository::new(db);
    let param = GetPaginatedCoursesParam::new(1, 4).unwrap();
    let (courses, total) = repo.get_paginated(&param).await?;

    assert_eq!(total, 6);
    let ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![5, 6]);

    Ok(())
}

/// Tests a page past the end of the table.
///
/// Expected: Ok((empty, 6))
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    let repo = CourseRepository::new(db);
    let param = GetPaginatedCoursesParam::new(5, 10).unwrap();
    let (courses, total) = repo.get_paginated(&param).await?;

    assert!(courses.is_empty());
    assert_eq!(total, 6);

    Ok(())
}
