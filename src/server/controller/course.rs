use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ProblemDto,
        course::{
            CourseDto, CreateCourseDto, PaginatedCoursesDto, PatchCourseDto, UpdateCourseDto,
        },
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
        model::course::{
            validate_id, CreateCourseParam, GetPaginatedCoursesParam, PatchCourseParam,
            UpdateCourseParam, DEFAULT_ENTRIES,
        },
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, starting at 0
    #[serde(default)]
    pub page: u64,
    /// Items per page, between 1 and 100
    #[serde(default = "default_entries")]
    #[param(minimum = 1, maximum = 100)]
    pub entries: u64,
}

fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_courses, create_course))
        .routes(routes!(
            get_course,
            update_course,
            patch_course,
            delete_course
        ))
}

/// Get paginated courses.
///
/// Returns courses ordered by ID.
///
/// # Returns
/// - `200 OK` - One page of courses with the total count
/// - `400 Bad Request` - `entries` out of range or malformed query
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = COURSE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved courses", body = PaginatedCoursesDto),
        (status = 400, description = "Invalid pagination parameters", body = ProblemDto, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ProblemDto, content_type = "application/problem+json")
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetPaginatedCoursesParam::new(params.page, params.entries)?;
    let courses = CourseService::new(&state.db).get_paginated(param).await?;

    Ok((StatusCode::OK, Json(courses.into_dto())))
}

/// Add a new course.
///
/// # Returns
/// - `201 Created` - Successfully created course
/// - `400 Bad Request` - Invalid course data (empty name, bad date, negative lectures)
/// - `409 Conflict` - A course with the same name already exists
/// - `415 Unsupported Media Type` - Body is not JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ProblemDto, content_type = "application/problem+json"),
        (status = 409, description = "Course name already exists", body = ProblemDto, content_type = "application/problem+json"),
        (status = 415, description = "Request body is not JSON", body = ProblemDto, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ProblemDto, content_type = "application/problem+json")
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCourseParam::from_dto(payload)?;
    let course = CourseService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Get a course by ID.
///
/// # Returns
/// - `200 OK` - The course
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No course with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID in the database", minimum = 1)
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 400, description = "Invalid course ID", body = ProblemDto, content_type = "application/problem+json"),
        (status = 404, description = "Course not found", body = ProblemDto, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ProblemDto, content_type = "application/problem+json")
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .get_by_id(validate_id(id)?)
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Replace a course.
///
/// Every field is required and overwrites the stored value.
///
/// # Returns
/// - `200 OK` - Successfully updated course
/// - `400 Bad Request` - Invalid ID or course data
/// - `404 Not Found` - No course with that ID
/// - `409 Conflict` - Another course already has the new name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID in the database", minimum = 1)
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ProblemDto, content_type = "application/problem+json"),
        (status = 404, description = "Course not found", body = ProblemDto, content_type = "application/problem+json"),
        (status = 409, description = "Course name already exists", body = ProblemDto, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ProblemDto, content_type = "application/problem+json")
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateCourseParam::from_dto(id, payload)?;
    let course = CourseService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Update some fields of a course.
///
/// Fields that are absent or null keep their stored value.
///
/// # Returns
/// - `200 OK` - Successfully updated course
/// - `400 Bad Request` - Invalid ID or course data
/// - `404 Not Found` - No course with that ID
/// - `409 Conflict` - Another course already has the new name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID in the database", minimum = 1)
    ),
    request_body = PatchCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ProblemDto, content_type = "application/problem+json"),
        (status = 404, description = "Course not found", body = ProblemDto, content_type = "application/problem+json"),
        (status = 409, description = "Course name already exists", body = ProblemDto, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ProblemDto, content_type = "application/problem+json")
    ),
)]
pub async fn patch_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<PatchCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = PatchCourseParam::from_dto(id, payload)?;
    let course = CourseService::new(&state.db).patch(param).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course.
///
/// # Returns
/// - `200 OK` - The course as it was before deletion
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No course with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID in the database", minimum = 1)
    ),
    responses(
        (status = 200, description = "Successfully deleted course", body = CourseDto),
        (status = 400, description = "Invalid course ID", body = ProblemDto, content_type = "application/problem+json"),
        (status = 404, description = "Course not found", body = ProblemDto, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ProblemDto, content_type = "application/problem+json")
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .delete(validate_id(id)?)
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}
