use super::*;

async fn search_ids(
    db: &sea_orm::DatabaseConnection,
    name: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Vec<i32>, DbErr> {
    let param = SearchCoursesParam {
        name: name.map(str::to_string),
        start: start.map(date),
        end: end.map(date),
    };
    let courses = CourseRepository::new(db).search(&param).await?;

    Ok(courses.into_iter().map(|c| c.id).collect())
}

/// Tests searching by name substring.
///
/// Expected: IDs of the three "Level" courses
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    assert_eq!(search_ids(db, Some("Level"), None, None).await?, vec![1, 3, 5]);
    assert_eq!(search_ids(db, Some("Python"), None, None).await?, vec![2, 4, 6]);

    Ok(())
}

/// Tests the inclusive lower bound on start date.
///
/// Expected: IDs of courses starting on or after 2022-02-22
#[tokio::test]
async fn filters_by_start_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    assert_eq!(
        search_ids(db, None, Some("2022-02-22"), None).await?,
        vec![3, 5, 6]
    );
    // Bound is inclusive
    assert_eq!(
        search_ids(db, None, Some("2023-06-07"), None).await?,
        vec![5]
    );

    Ok(())
}

/// Tests the inclusive upper bound on end date.
///
/// Expected: IDs of courses ending on or before 2024-04-24
#[tokio::test]
async fn filters_by_end_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    assert_eq!(
        search_ids(db, None, None, Some("2024-04-24")).await?,
        vec![1, 2, 4, 6]
    );
    assert_eq!(
        search_ids(db, None, None, Some("2022-04-21")).await?,
        vec![2]
    );

    Ok(())
}

/// Tests combining all three filters.
///
/// Expected: only courses matching every filter
#[tokio::test]
async fn combines_filters_with_and() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    assert_eq!(
        search_ids(db, Some("Python"), Some("2021-06-17"), Some("2024-04-24")).await?,
        vec![2, 6]
    );

    Ok(())
}

/// Tests a search without filters.
///
/// Expected: every course ordered by ID
#[tokio::test]
async fn returns_all_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    assert_eq!(
        search_ids(db, None, None, None).await?,
        vec![1, 2, 3, 4, 5, 6]
    );

    Ok(())
}

/// Tests a search that matches nothing.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sample_catalog(db).await?;

    assert!(search_ids(db, Some("Rust"), None, None).await?.is_empty());

    Ok(())
}

/// Tests that LIKE wildcards in the name are matched literally.
///
/// Expected: "%" and "_" only match courses containing those characters
#[tokio::test]
async fn matches_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plain = factory::course::CourseFactory::new(db)
        .name("Plain course")
        .build()
        .await?;
    let percent = factory::course::CourseFactory::new(db)
        .name("100% Rust")
        .build()
        .await?;
    let underscore = factory::course::CourseFactory::new(db)
        .name("snake_case basics")
        .build()
        .await?;

    assert_eq!(search_ids(db, Some("%"), None, None).await?, vec![percent.id]);
    assert_eq!(
        search_ids(db, Some("_"), None, None).await?,
        vec![underscore.id]
    );
    assert!(!search_ids(db, Some("course"), None, None)
        .await?
        .contains(&percent.id));
    assert_eq!(
        search_ids(db, Some("Plain"), None, None).await?,
        vec![plain.id]
    );

    Ok(())
}
