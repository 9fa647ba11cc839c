use axum::{extract::State, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ProblemDto,
        course::{CourseDto, SearchCoursesDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiQuery},
        model::course::{Course, SearchCoursesParam},
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(search_courses, search_courses_by_body))
}

async fn run_search(
    state: &AppState,
    filters: SearchCoursesDto,
) -> Result<Json<Vec<CourseDto>>, AppError> {
    let param = SearchCoursesParam::from_dto(filters)?;
    let courses = CourseService::new(&state.db).search(param).await?;

    Ok(Json(courses.into_iter().map(Course::into_dto).collect()))
}

/// Search courses using query parameters.
///
/// All filters are optional and combined with AND. With no filters every course
/// is returned.
///
/// # Returns
/// - `200 OK` - Matching courses, possibly empty
/// - `400 Bad Request` - Empty name or a date not in `YYYY-MM-DD` format
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/search",
    tag = SEARCH_TAG,
    params(SearchCoursesDto),
    responses(
        (status = 200, description = "Matching courses", body = Vec<CourseDto>),
        (status = 400, description = "Invalid search parameters", body = ProblemDto, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ProblemDto, content_type = "application/problem+json")
    ),
)]
pub async fn search_courses(
    State(state): State<AppState>,
    ApiQuery(filters): ApiQuery<SearchCoursesDto>,
) -> Result<Json<Vec<CourseDto>>, AppError> {
    run_search(&state, filters).await
}

/// Search courses using a JSON body.
///
/// Accepts the same filters as the GET form; `{}` returns every course.
///
/// # Returns
/// - `200 OK` - Matching courses, possibly empty
/// - `400 Bad Request` - Empty name or a date not in `YYYY-MM-DD` format
/// - `415 Unsupported Media Type` - Body is not JSON
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/search",
    tag = SEARCH_TAG,
    request_body = SearchCoursesDto,
    responses(
        (status = 200, description = "Matching courses", body = Vec<CourseDto>),
        (status = 400, description = "Invalid search parameters", body = ProblemDto, content_type = "application/problem+json"),
        (status = 415, description = "Request body is not JSON", body = ProblemDto, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ProblemDto, content_type = "application/problem+json")
    ),
)]
pub async fn search_courses_by_body(
    State(state): State<AppState>,
    ApiJson(filters): ApiJson<SearchCoursesDto>,
) -> Result<Json<Vec<CourseDto>>, AppError> {
    run_search(&state, filters).await
}
