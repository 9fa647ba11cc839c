use axum::http::Uri;

use crate::server::error::AppError;

/// Handler for requests that match no route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!(
        "The requested URL {} was not found on the server",
        uri.path()
    ))
}

/// Handler for requests whose route exists but does not accept the method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
