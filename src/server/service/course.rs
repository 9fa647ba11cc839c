use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::course::CourseRepository,
    error::AppError,
    model::course::{
        Course, CreateCourseParam, GetPaginatedCoursesParam, PaginatedCourses, PatchCourseParam,
        SearchCoursesParam, UpdateCourseParam,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course
    ///
    /// Returns `AppError::Conflict` if another course already has the same name.
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, AppError> {
        let name = param.name.clone();

        let course = CourseRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| conflict_on_duplicate_name(e, &name))?;

        tracing::debug!("Created course {} ({})", course.id, course.name);

        Ok(course)
    }

    /// Gets a course by ID, `AppError::NotFound` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Gets one page of courses
    pub async fn get_paginated(
        &self,
        param: GetPaginatedCoursesParam,
    ) -> Result<PaginatedCourses, AppError> {
        let (courses, total) = CourseRepository::new(self.db)
            .get_paginated(&param)
            .await?;

        Ok(PaginatedCourses {
            courses,
            total,
            page: param.page,
            per_page: param.per_page,
        })
    }

    /// Replaces all fields of a course
    pub async fn update(&self, param: UpdateCourseParam) -> Result<Course, AppError> {
        let id = param.id;
        let name = param.name.clone();

        CourseRepository::new(self.db)
            .update(param)
            .await
            .map_err(|e| conflict_on_duplicate_name(e, &name))?
            .ok_or_else(|| not_found(id))
    }

    /// Updates only the supplied fields of a course
    pub async fn patch(&self, param: PatchCourseParam) -> Result<Course, AppError> {
        let id = param.id;
        let name = param.name.clone().unwrap_or_default();

        CourseRepository::new(self.db)
            .patch(param)
            .await
            .map_err(|e| conflict_on_duplicate_name(e, &name))?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a course and returns what was stored
    pub async fn delete(&self, id: i32) -> Result<Course, AppError> {
        let course = CourseRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::debug!("Deleted course {} ({})", course.id, course.name);

        Ok(course)
    }

    /// Finds courses matching the filters; an empty result is not an error
    pub async fn search(&self, param: SearchCoursesParam) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).search(&param).await?)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Course with ID={} is not found in the database", id))
}

fn conflict_on_duplicate_name(err: DbErr, name: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("Course with name '{}' already exists", name))
        }
        _ => AppError::DbErr(err),
    }
}
