//! Course data repository for database operations.
//!
//! This module provides the `CourseRepository` for managing course records. Every method
//! issues a single query (or a lookup followed by one write) against the `course` table and
//! converts entity models into the `Course` domain model before returning.

use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::course::{
    Course, CreateCourseParam, GetPaginatedCoursesParam, PatchCourseParam, SearchCoursesParam,
    UpdateCourseParam,
};

/// Escape character used for LIKE patterns built from user input.
const LIKE_ESCAPE: char = '\\';

/// Repository providing database operations for course management.
pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    /// Creates a new CourseRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CourseRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course.
    ///
    /// Inserts a new course record and stamps both `created_at` and `updated_at` with the
    /// current time.
    ///
    /// # Arguments
    /// - `param` - Validated course fields
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course with generated ID
    /// - `Err(DbErr)` - Database error during insert, including unique name violations
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let now = Utc::now();

        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(param.name),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            lectures: ActiveValue::Set(param.lectures),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Gets a course by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found
    /// - `Ok(None)` - No course with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Gets one page of courses ordered by ID.
    ///
    /// # Arguments
    /// - `param` - Zero-indexed page and page size
    ///
    /// # Returns
    /// - `Ok((courses, total))` - Courses on the requested page and total course count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        param: &GetPaginatedCoursesParam,
    ) -> Result<(Vec<Course>, u64), DbErr> {
        let paginator = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let courses = entities.into_iter().map(Course::from_entity).collect();

        Ok((courses, total))
    }

    /// Replaces every field of a course.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The updated course
    /// - `Ok(None)` - No course with that ID
    /// - `Err(DbErr)` - Database error during update, including unique name violations
    pub async fn update(&self, param: UpdateCourseParam) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::course::ActiveModel = course.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.start_date = ActiveValue::Set(param.start_date);
        active_model.end_date = ActiveValue::Set(param.end_date);
        active_model.lectures = ActiveValue::Set(param.lectures);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Course::from_entity(entity)))
    }

    /// Updates the fields that are present in `param`.
    ///
    /// `updated_at` is bumped even when no field is supplied.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The updated course
    /// - `Ok(None)` - No course with that ID
    /// - `Err(DbErr)` - Database error during update, including unique name violations
    pub async fn patch(&self, param: PatchCourseParam) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::course::ActiveModel = course.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(start_date) = param.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = param.end_date {
            active_model.end_date = ActiveValue::Set(end_date);
        }
        if let Some(lectures) = param.lectures {
            active_model.lectures = ActiveValue::Set(lectures);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Course::from_entity(entity)))
    }

    /// Deletes a course and returns the row as it was before deletion.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The deleted course
    /// - `Ok(None)` - No course with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        course.clone().delete(self.db).await?;

        Ok(Some(Course::from_entity(course)))
    }

    /// Finds courses matching every supplied filter, ordered by ID.
    ///
    /// - `name` matches as a substring; LIKE wildcards in it are matched literally
    /// - `start` keeps courses starting on or after the date
    /// - `end` keeps courses ending on or before the date
    ///
    /// # Returns
    /// - `Ok(Vec<Course>)` - Matching courses, empty when nothing matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, param: &SearchCoursesParam) -> Result<Vec<Course>, DbErr> {
        let mut condition = Condition::all();

        if let Some(name) = &param.name {
            let pattern = format!("%{}%", escape_like(name));
            condition = condition.add(
                entity::course::Column::Name.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
            );
        }
        if let Some(start) = param.start {
            condition = condition.add(entity::course::Column::StartDate.gte(start));
        }
        if let Some(end) = param.end {
            condition = condition.add(entity::course::Column::EndDate.lte(end));
        }

        let entities = entity::prelude::Course::find()
            .filter(condition)
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }
}

/// Escapes LIKE metacharacters so the value matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
