// src/handlers/mod.rs

pub mod dashboard;
pub mod editor;
pub mod preview;

use axum::{http::StatusCode, response::IntoResponse};

use crate::views::pages;

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, pages::not_found())
}
