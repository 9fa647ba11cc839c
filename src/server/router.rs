use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ProblemDto,
    server::{
        controller::{course, fallback, search},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Catalog API",
        description = "CRUD and search operations over a catalog of courses"
    ),
    tags(
        (name = "course", description = "Course management endpoints"),
        (name = "search", description = "Course search endpoints")
    ),
    components(schemas(ProblemDto))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(course::routes())
        .merge(search::routes())
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/v1/ui").url("/api/v1/openapi.json", api))
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
