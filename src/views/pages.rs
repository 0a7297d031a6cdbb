// src/views/pages.rs

use axum::response::Html;

use super::{
    components,
    layout::{NavItem, shell},
};
use crate::{
    models::{
        form::{FormErrors, PostForm},
        post::{Post, Status},
    },
    pagination::PageWindow,
};

/// Post listing filtered by status, with the status tabs on top.
pub fn dashboard(active: Status, posts: &[Post], notice: Option<&str>) -> Html<String> {
    let content = format!(
        r#"<div class="page-header">
<div><h2 class="page-title">Dashboard</h2><p class="page-subtitle">Manage your content</p></div>
</div>
{notice}
<div class="card">
<div class="card-header">{tabs}</div>
<div class="card-content">{table}</div>
</div>"#,
        notice = notice.map(components::notice).unwrap_or_default(),
        tabs = components::tabs(active),
        table = components::post_table(posts, active),
    );

    shell(Some(NavItem::Dashboard), "Dashboard", &content)
}

/// Which editor is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: i64, original_status: Status },
}

/// Add / edit form. Both modes share the layout; edit adds a Cancel link back
/// to the tab the post came from.
pub fn post_editor(mode: EditorMode, form: &PostForm, errors: &FormErrors) -> Html<String> {
    let (heading, subtitle, action, cancel) = match mode {
        EditorMode::Create => ("Add New Post", String::new(), "/add".to_string(), String::new()),
        EditorMode::Edit {
            id,
            original_status,
        } => (
            "Edit Post",
            r#"<p class="page-subtitle">Update your content</p>"#.to_string(),
            format!("/edit/{id}"),
            format!(
                r#"<a href="/?tab={original_status}" class="icon-button" title="Cancel"><i class="icon icon-x"></i></a>"#
            ),
        ),
    };

    let original = match mode {
        EditorMode::Edit {
            original_status, ..
        } => format!(r#"<input type="hidden" name="original_status" value="{original_status}">"#),
        EditorMode::Create => String::new(),
    };

    let content = format!(
        r#"<div class="page-header">
<div><h2 class="page-title">{heading}</h2>{subtitle}</div>
{cancel}
</div>
{notice}
<form method="post" action="{action}" class="editor">
{original}
<div class="editor-main">
{title}
{editor}
</div>
<div class="editor-side">
{category}
{actions}
</div>
</form>"#,
        notice = errors.notice().map(components::notice).unwrap_or_default(),
        title = components::title_input(form, errors),
        editor = components::content_editor(form, errors),
        category = components::category_select(form, errors),
        actions = components::publish_actions(),
    );

    let active = match mode {
        EditorMode::Create => Some(NavItem::AddPost),
        EditorMode::Edit { .. } => None,
    };

    shell(active, heading, &content)
}

/// Public preview of published posts, one page at a time.
pub fn preview(window: &PageWindow<Post>, notice: Option<&str>) -> Html<String> {
    let body = if window.items.is_empty() {
        let back = if window.has_prev() {
            format!(
                r#"<div class="pagination"><a href="/preview?offset={}" class="page-button" rel="prev"><i class="icon icon-chevron-left"></i>Prev</a></div>"#,
                window.page.prev().offset
            )
        } else {
            String::new()
        };

        format!(
            r#"<div class="card">{empty}</div>{back}"#,
            empty = components::empty_state(
                "newspaper",
                "No published articles",
                "Publish your first article to see it here",
            ),
        )
    } else {
        let cards: String = window.items.iter().map(components::post_card).collect();
        format!(
            r#"<div class="card-grid">
{cards}
</div>
{pagination}"#,
            pagination = components::pagination_bar(window, "/preview"),
        )
    };

    let content = format!(
        r#"<div class="page-header">
<div><h2 class="page-title">Published Articles</h2><p class="page-subtitle">Browse all published content</p></div>
</div>
{notice}
{body}"#,
        notice = notice.map(components::notice).unwrap_or_default(),
    );

    shell(Some(NavItem::Preview), "Preview", &content)
}

/// Page for routes that do not exist.
pub fn not_found() -> Html<String> {
    super::layout::error_page(axum::http::StatusCode::NOT_FOUND, "Page not found")
}
