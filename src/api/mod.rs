// src/api/mod.rs

//! Client side of the upstream article REST API.

pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    models::post::{Post, PostInput, Status},
    pagination::Page,
};

pub use http::HttpArticleApi;

/// Operations the admin pages need from the article API.
#[async_trait]
pub trait ArticleApi: Send + Sync {
    /// Lists posts in `status`. Without a page the API applies its own default.
    async fn list_by_status(&self, status: Status, page: Option<Page>)
    -> Result<Vec<Post>, ApiError>;

    async fn get_post(&self, id: i64) -> Result<Post, ApiError>;

    async fn create_post(&self, input: &PostInput) -> Result<Post, ApiError>;

    async fn update_post(&self, id: i64, input: &PostInput) -> Result<Post, ApiError>;

    /// Status-only update. Moving a post to `Thrash` is the soft delete.
    async fn set_status(&self, id: i64, status: Status) -> Result<Post, ApiError>;
}

pub type SharedApi = Arc<dyn ArticleApi>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("article not found")]
    NotFound,

    /// 400 from the API, with whatever it said about the offending fields.
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        message: Option<String>,
        fields: Vec<(String, String)>,
    },

    #[error("article API responded {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("article API unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid article API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}
