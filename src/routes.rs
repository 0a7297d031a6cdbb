// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{self, dashboard, editor, preview},
    state::AppState,
};

/// Assembles the admin application router.
///
/// * Dashboard (`/`), editor (`/add`, `/edit/{id}`) and preview (`/preview`) pages.
/// * Form actions post back to the same paths; trashing has its own endpoint.
/// * Unknown paths get the not-found page.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/posts/{id}/trash", post(dashboard::trash_post))
        .route("/add", get(editor::new_post).post(editor::create_post))
        .route(
            "/edit/{id}",
            get(editor::edit_post).post(editor::update_post),
        )
        .route("/preview", get(preview::preview))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
