// src/handlers/dashboard.rs

use axum::{
    extract::State,
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::{
    api::SharedApi,
    extract::{PageForm, PagePath, PageQuery},
    models::post::Status,
    views::pages,
};

/// Query parameters of the dashboard.
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub tab: Option<String>,
}

/// Resolves the `tab` parameter. Missing or unknown values show published posts.
pub fn active_tab(tab: Option<&str>) -> Status {
    tab.and_then(|t| t.parse().ok()).unwrap_or(Status::Publish)
}

/// Lists the posts of the active tab.
/// A failed fetch still renders the page, with an empty table and a notice.
pub async fn dashboard(
    State(api): State<SharedApi>,
    PageQuery(params): PageQuery<DashboardParams>,
) -> Html<String> {
    let tab = active_tab(params.tab.as_deref());

    match api.list_by_status(tab, None).await {
        Ok(posts) => pages::dashboard(tab, &posts, None),
        Err(e) => {
            tracing::error!("Failed to fetch posts: {}", e);
            pages::dashboard(tab, &[], Some("Could not load posts. Try again later."))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TrashForm {
    pub tab: Option<String>,
}

/// Moves a post to the trash (status-only update), then goes back to the tab
/// the action was taken from.
pub async fn trash_post(
    State(api): State<SharedApi>,
    PagePath(id): PagePath<i64>,
    PageForm(form): PageForm<TrashForm>,
) -> Redirect {
    match api.set_status(id, Status::Thrash).await {
        Ok(_) => tracing::info!(post_id = id, "Post moved to trash"),
        Err(e) => tracing::error!(post_id = id, "Failed to trash post: {}", e),
    }

    let tab = active_tab(form.tab.as_deref());
    Redirect::to(&format!("/?tab={}", tab))
}
