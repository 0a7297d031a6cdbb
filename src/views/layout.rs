// src/views/layout.rs

use axum::{http::StatusCode, response::Html};

use crate::utils::html::escape;

/// Sidebar destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    AddPost,
    Preview,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Dashboard, NavItem::AddPost, NavItem::Preview];

    pub fn path(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::AddPost => "/add",
            NavItem::Preview => "/preview",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::AddPost => "Add Post",
            NavItem::Preview => "Preview",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "layout-dashboard",
            NavItem::AddPost => "plus-circle",
            NavItem::Preview => "eye",
        }
    }
}

/// Wraps page content in the admin shell: navbar, sidebar and main container.
///
/// `active` highlights the matching sidebar link; error pages pass `None`.
pub fn shell(active: Option<NavItem>, title: &str, content: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Content Manager</title>
</head>
<body class="app">
<input type="checkbox" id="sidebar-toggle" class="sidebar-toggle" hidden>
{navbar}
<div class="layout">
{sidebar}
<main class="main">
{content}
</main>
</div>
</body>
</html>"#,
        title = escape(title),
        navbar = navbar(),
        sidebar = sidebar(active),
        content = content,
    ))
}

fn navbar() -> String {
    r#"<nav class="navbar">
<label for="sidebar-toggle" class="navbar-menu" aria-label="Open menu"><i class="icon icon-menu"></i></label>
<div class="brand"><span class="brand-mark">C</span><h1 class="brand-name">Content Manager</h1></div>
</nav>"#
        .to_string()
}

fn sidebar(active: Option<NavItem>) -> String {
    let links: String = NavItem::ALL
        .iter()
        .map(|item| {
            let class = if Some(*item) == active {
                "nav-link nav-link-active"
            } else {
                "nav-link"
            };
            format!(
                r#"<a href="{path}" class="{class}"><i class="icon icon-{icon}"></i><span>{label}</span></a>"#,
                path = item.path(),
                class = class,
                icon = item.icon(),
                label = item.label(),
            )
        })
        .collect();

    format!(
        r#"<label for="sidebar-toggle" class="sidebar-backdrop"></label>
<aside class="sidebar">
<div class="sidebar-header"><span>Menu</span><label for="sidebar-toggle" class="sidebar-close"><i class="icon icon-x"></i></label></div>
<nav class="sidebar-nav">{links}</nav>
</aside>"#
    )
}

/// Full page for a failed request.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let heading = status.canonical_reason().unwrap_or("Error");
    let content = format!(
        r#"<section class="error">
<h2 class="page-title">{code} {heading}</h2>
<p class="error-message">{message}</p>
<a href="/" class="button button-secondary">Back to dashboard</a>
</section>"#,
        code = status.as_u16(),
        heading = heading,
        message = escape(message),
    );

    shell(None, heading, &content)
}
