//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into RFC 7807 problem responses. The `AppError` enum serves
//! as the top-level error type and implements `IntoResponse` so handlers can return
//! it directly.

pub mod config;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::{ProblemDto, PROBLEM_TYPE_BLANK},
    server::error::config::ConfigError,
};

/// Media type of every error body.
pub const PROBLEM_JSON: &str = "application/problem+json";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure errors use `#[from]` for `?`
/// propagation, while request-level variants carry a client-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Connection failures result in 503 Service Unavailable, anything else in
    /// 500 Internal Server Error. Details are only logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O error, e.g. failing to bind the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing data, e.g. a duplicate course name.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Request body was not sent as JSON.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// The route exists but does not accept the request method.
    #[error("The method is not allowed for the requested URL.")]
    MethodNotAllowed,
}

/// Builds an RFC 7807 problem response with the canonical reason phrase as title.
pub fn problem(status: StatusCode, detail: impl Into<String>) -> Response {
    let body = ProblemDto {
        problem_type: PROBLEM_TYPE_BLANK.to_string(),
        title: status.canonical_reason().unwrap_or("Error").to_string(),
        status: status.as_u16(),
        detail: detail.into(),
    };

    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON))],
        Json(body),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 405 Method Not Allowed - For `MethodNotAllowed` variant
/// - 409 Conflict - For `Conflict` variant
/// - 415 Unsupported Media Type - For `UnsupportedMediaType` variant
/// - 503 Service Unavailable - For database connection failures
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => problem(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => problem(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => problem(StatusCode::CONFLICT, msg),
            Self::UnsupportedMediaType(msg) => problem(StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            Self::MethodNotAllowed => problem(
                StatusCode::METHOD_NOT_ALLOWED,
                Self::MethodNotAllowed.to_string(),
            ),
            Self::DbErr(err @ (DbErr::Conn(_) | DbErr::ConnectionAcquire(_))) => {
                tracing::error!("Database unavailable: {}", err);
                problem(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Unable to connect to the database",
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic detail to the client so that
/// implementation details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        problem(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
