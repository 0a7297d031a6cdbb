// src/views/components.rs

//! Reusable page fragments. Each function returns an HTML string; any text
//! that came from the article API is escaped here.

use crate::{
    models::{
        form::{CONTENT_MIN_CHARS, FormErrors, PostForm, TITLE_MIN_CHARS},
        post::{Category, Post, Status},
    },
    pagination::PageWindow,
    utils::html::escape,
};

/// CSS modifier for a category badge or card header. Unknown categories
/// fall back to a neutral style.
fn category_slug(category: &str) -> &'static str {
    category
        .parse::<Category>()
        .map(|c| c.slug())
        .unwrap_or("default")
}

pub fn category_badge(category: &str) -> String {
    format!(
        r#"<span class="badge badge-category-{slug}">{name}</span>"#,
        slug = category_slug(category),
        name = escape(category),
    )
}

pub fn status_badge(status: Status) -> String {
    format!(
        r#"<span class="badge badge-status-{slug}">{name}</span>"#,
        slug = status.as_str().to_lowercase(),
        name = status,
    )
}

/// Status filter for the dashboard. Each tab is a link that puts its status
/// in the `tab` query parameter.
pub fn tabs(active: Status) -> String {
    let items: String = Status::ALL
        .iter()
        .map(|status| {
            let class = if *status == active { "tab tab-active" } else { "tab" };
            format!(
                r#"<a href="/?tab={id}" class="{class}">{label}</a>"#,
                id = status,
                class = class,
                label = status.tab_label(),
            )
        })
        .collect();

    format!(r#"<div class="tabs" role="tablist">{items}</div>"#)
}

pub fn empty_state(icon: &str, title: &str, hint: &str) -> String {
    format!(
        r#"<div class="empty-state">
<div class="empty-icon"><i class="icon icon-{icon}"></i></div>
<p class="empty-title">{title}</p>
<p class="empty-hint">{hint}</p>
</div>"#
    )
}

pub fn notice(message: &str) -> String {
    format!(
        r#"<div class="notice notice-error" role="alert">{}</div>"#,
        escape(message)
    )
}

/// Dashboard table. The Trash action posts back with the active tab so the
/// redirect lands on the same listing.
pub fn post_table(posts: &[Post], active: Status) -> String {
    if posts.is_empty() {
        return empty_state(
            "file-text",
            "No posts found",
            "Create your first post to get started",
        );
    }

    let rows: String = posts
        .iter()
        .map(|post| {
            format!(
                r#"<tr class="post-row">
<td class="post-title">{title}</td>
<td>{category}</td>
<td>{status}</td>
<td class="actions">
<a href="/edit/{id}" class="icon-button" title="Edit"><i class="icon icon-pencil"></i></a>
<form method="post" action="/posts/{id}/trash" class="inline-form">
<input type="hidden" name="tab" value="{tab}">
<button type="submit" class="icon-button icon-button-danger" title="Trash"><i class="icon icon-trash"></i></button>
</form>
</td>
</tr>"#,
                title = escape(&post.title),
                category = category_badge(&post.category),
                status = status_badge(post.status),
                id = post.id,
                tab = active,
            )
        })
        .collect();

    format!(
        r#"<div class="table-wrapper">
<table class="post-table">
<thead><tr><th>Title</th><th>Category</th><th>Status</th><th class="actions">Actions</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>
</div>"#
    )
}

/// Preview card for a published post.
pub fn post_card(post: &Post) -> String {
    let date = post
        .created_at
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default();

    format!(
        r#"<article class="post-card">
<div class="card-cover card-cover-{slug}"><span class="badge badge-cover">{category}</span></div>
<div class="card-body">
<h3 class="card-title">{title}</h3>
<p class="card-excerpt">{content}</p>
<div class="card-footer"><span class="card-date">{date}</span><span class="card-more">Read More <i class="icon icon-arrow-right"></i></span></div>
</div>
</article>"#,
        slug = category_slug(&post.category),
        category = escape(&post.category),
        title = escape(&post.title),
        content = escape(&post.content),
        date = date,
    )
}

/// Prev / page number / Next controls for a peek-paginated listing.
pub fn pagination_bar<T>(window: &PageWindow<T>, base_path: &str) -> String {
    let prev = if window.has_prev() {
        format!(
            r#"<a href="{base_path}?offset={offset}" class="page-button" rel="prev"><i class="icon icon-chevron-left"></i>Prev</a>"#,
            offset = window.page.prev().offset,
        )
    } else {
        r#"<span class="page-button page-button-disabled" aria-disabled="true"><i class="icon icon-chevron-left"></i>Prev</span>"#
            .to_string()
    };

    let next = if window.has_next() {
        format!(
            r#"<a href="{base_path}?offset={offset}" class="page-button" rel="next">Next<i class="icon icon-chevron-right"></i></a>"#,
            offset = window.page.next().offset,
        )
    } else {
        r#"<span class="page-button page-button-disabled" aria-disabled="true">Next<i class="icon icon-chevron-right"></i></span>"#
            .to_string()
    };

    format!(
        r#"<div class="pagination">{prev}<span class="page-number">Page {number}</span>{next}</div>"#,
        number = window.page.number(),
    )
}

fn field_error(errors: &FormErrors, field: &str) -> String {
    errors
        .get(field)
        .map(|msg| format!(r#"<p class="field-error">{}</p>"#, escape(msg)))
        .unwrap_or_default()
}

pub fn title_input(form: &PostForm, errors: &FormErrors) -> String {
    format!(
        r#"<div class="panel">
<input type="text" name="title" value="{value}" placeholder="Enter your title..." class="title-input">
{error}
<p class="char-count">{count}/{min} characters minimum</p>
</div>"#,
        value = escape(&form.title),
        error = field_error(errors, "title"),
        count = form.title_chars(),
        min = TITLE_MIN_CHARS,
    )
}

/// Formatting toolbar. The buttons are decorative and do nothing.
fn toolbar() -> String {
    let button = |icon: &str| {
        format!(r#"<button type="button" class="toolbar-button" tabindex="-1"><i class="icon icon-{icon}"></i></button>"#)
    };

    format!(
        r#"<div class="toolbar">{}{}{}<span class="toolbar-divider"></span>{}{}</div>"#,
        button("bold"),
        button("italic"),
        button("underline"),
        button("list"),
        button("link"),
    )
}

pub fn content_editor(form: &PostForm, errors: &FormErrors) -> String {
    format!(
        r#"<div class="panel panel-editor">
{toolbar}
<div class="editor-body">
<textarea name="content" rows="14" placeholder="Write your content here..." class="content-input">{value}</textarea>
{error}
<p class="char-count">{count}/{min} characters minimum</p>
</div>
</div>"#,
        toolbar = toolbar(),
        value = escape(&form.content),
        error = field_error(errors, "content"),
        count = form.content_chars(),
        min = CONTENT_MIN_CHARS,
    )
}

pub fn category_select(form: &PostForm, errors: &FormErrors) -> String {
    let options: String = Category::ALL
        .iter()
        .map(|c| {
            let selected = if form.category == c.as_str() { " selected" } else { "" };
            format!(r#"<option value="{c}"{selected}>{c}</option>"#)
        })
        .collect();

    format!(
        r#"<div class="panel">
<h3 class="panel-title">Category</h3>
<select name="category" class="select">
<option value="">Select category</option>
{options}
</select>
{error}
</div>"#,
        error = field_error(errors, "category"),
    )
}

/// The two submit buttons. Both are named `status`; the pressed one decides
/// how the post is saved.
pub fn publish_actions() -> String {
    format!(
        r#"<div class="panel">
<h3 class="panel-title">Publish</h3>
<div class="publish-actions">
<button type="submit" name="status" value="{publish}" class="button button-primary">Publish Now</button>
<button type="submit" name="status" value="{draft}" class="button button-secondary">Save as Draft</button>
</div>
</div>"#,
        publish = Status::Publish,
        draft = Status::Draft,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Page;

    fn post(id: i64, title: &str, category: &str, status: Status) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: "content".to_string(),
            category: category.to_string(),
            status,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn active_tab_is_marked() {
        let html = tabs(Status::Draft);
        assert!(html.contains(r#"<a href="/?tab=Draft" class="tab tab-active">Drafts</a>"#));
        assert!(html.contains(r#"<a href="/?tab=Publish" class="tab">Published</a>"#));
        assert!(html.contains(r#"<a href="/?tab=Thrash" class="tab">Trashed</a>"#));
    }

    #[test]
    fn empty_table_shows_hint() {
        let html = post_table(&[], Status::Publish);
        assert!(html.contains("No posts found"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn table_rows_link_to_edit_and_trash() {
        let html = post_table(&[post(9, "Hello", "Travel", Status::Draft)], Status::Draft);
        assert!(html.contains(r#"href="/edit/9""#));
        assert!(html.contains(r#"action="/posts/9/trash""#));
        assert!(html.contains(r#"name="tab" value="Draft""#));
        assert!(html.contains("badge-category-travel"));
        assert!(html.contains("badge-status-draft"));
    }

    #[test]
    fn unknown_category_uses_neutral_style() {
        let html = category_badge("Gardening");
        assert!(html.contains("badge-category-default"));
    }

    #[test]
    fn card_formats_date() {
        let mut p = post(1, "Hello", "Health", Status::Publish);
        p.created_at = Some("2024-01-02T15:04:05Z".parse().unwrap());
        let html = post_card(&p);
        assert!(html.contains("Jan 2, 2024"));
        assert!(html.contains("card-cover-health"));
    }

    #[test]
    fn pagination_disables_edges() {
        let first = PageWindow::new(Page::new(6, 0), vec![(); 6]);
        let html = pagination_bar(&first, "/preview");
        assert!(html.contains("page-button-disabled\" aria-disabled=\"true\"><i class=\"icon icon-chevron-left\"></i>Prev"));
        assert!(html.contains(r#"href="/preview?offset=6""#));
        assert!(html.contains("Page 1"));

        let last = PageWindow::new(Page::new(6, 6), vec![(); 2]);
        let html = pagination_bar(&last, "/preview");
        assert!(html.contains(r#"href="/preview?offset=0""#));
        assert!(html.contains("Page 2"));
        assert!(!html.contains("rel=\"next\""));
    }

    #[test]
    fn category_select_keeps_selection() {
        let form = PostForm {
            category: "Business".to_string(),
            ..PostForm::default()
        };
        let html = category_select(&form, &FormErrors::default());
        assert!(html.contains(r#"<option value="Business" selected>Business</option>"#));
        assert!(html.contains(r#"<option value="">Select category</option>"#));
    }

    #[test]
    fn counters_show_current_length() {
        let form = PostForm {
            title: "short".to_string(),
            ..PostForm::default()
        };
        let html = title_input(&form, &FormErrors::default());
        assert!(html.contains("5/20 characters minimum"));
    }
}
