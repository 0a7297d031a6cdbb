// src/handlers/preview.rs

use axum::{extract::State, response::Html};
use serde::Deserialize;

use crate::{
    api::SharedApi,
    config::Config,
    extract::PageQuery,
    models::post::Status,
    pagination::{Page, PageWindow},
    views::pages,
};

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub offset: Option<i64>,
}

/// Published posts, one page at a time.
/// Whether a next page exists is inferred from the current page being full.
pub async fn preview(
    State(api): State<SharedApi>,
    State(config): State<Config>,
    PageQuery(params): PageQuery<PreviewParams>,
) -> Html<String> {
    let page = Page::new(config.preview_page_size, params.offset.unwrap_or(0));

    match api.list_by_status(Status::Publish, Some(page)).await {
        Ok(posts) => pages::preview(&PageWindow::new(page, posts), None),
        Err(e) => {
            tracing::error!("Failed to fetch published posts: {}", e);
            pages::preview(
                &PageWindow::new(page, Vec::new()),
                Some("Could not load articles. Try again later."),
            )
        }
    }
}
