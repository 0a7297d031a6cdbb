// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::{api::ApiError, views::layout};

/// Global Application Error Enum.
/// Maps failures of a page request to an HTML error page.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 502 Bad Gateway (the article API failed)
    BadGateway(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Renders the error inside the admin shell with the matching status code.
/// Details of internal and upstream failures are logged, not shown.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
            AppError::BadGateway(msg) => {
                tracing::error!("Article API failure: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "The article service is unavailable".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, layout::error_page(status, &message)).into_response()
    }
}

/// Allows using `?` on article API calls.
impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound => AppError::NotFound("Post not found".to_string()),
            ApiError::Rejected { message, .. } => AppError::BadRequest(
                message.unwrap_or_else(|| "The article service rejected the request".to_string()),
            ),
            ApiError::InvalidBaseUrl(e) => AppError::InternalServerError(e.to_string()),
            other => AppError::BadGateway(other.to_string()),
        }
    }
}
