// src/api/http.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;

use super::{ApiError, ArticleApi};
use crate::{
    models::post::{Post, PostInput, Status, StatusUpdate},
    pagination::Page,
};

/// `reqwest`-backed [`ArticleApi`].
#[derive(Debug, Clone)]
pub struct HttpArticleApi {
    client: Client,
    base: String,
}

impl HttpArticleApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/article{}", self.base, path)
    }
}

#[async_trait]
impl ArticleApi for HttpArticleApi {
    async fn list_by_status(
        &self,
        status: Status,
        page: Option<Page>,
    ) -> Result<Vec<Post>, ApiError> {
        let mut request = self.client.get(self.endpoint(&format!("/{}", status)));
        if let Some(page) = page {
            request = request.query(&page);
        }

        // An empty listing comes back as `null`.
        let posts: Option<Vec<Post>> = decode(request.send().await?).await?;
        Ok(posts.unwrap_or_default())
    }

    async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        let response = self
            .client
            .get(self.endpoint(&format!("/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    async fn create_post(&self, input: &PostInput) -> Result<Post, ApiError> {
        let response = self.client.post(self.endpoint("")).json(input).send().await?;
        decode(response).await
    }

    async fn update_post(&self, id: i64, input: &PostInput) -> Result<Post, ApiError> {
        let response = self
            .client
            .put(self.endpoint(&format!("/{}", id)))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    async fn set_status(&self, id: i64, status: Status) -> Result<Post, ApiError> {
        let response = self
            .client
            .put(self.endpoint(&format!("/{}", id)))
            .json(&StatusUpdate { status })
            .send()
            .await?;
        decode(response).await
    }
}

/// Some endpoints wrap their payload in `{"data": ...}`, others return it bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(inner) => inner,
        }
    }
}

/// Error body shapes: `{"error": "..."}` and `{"errors": [{"field", "message"}]}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    field: String,
    message: String,
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        let body: Envelope<T> = response.json().await?;
        return Ok(body.into_inner());
    }

    let text = response.text().await.unwrap_or_default();
    Err(error_from_body(status, &text))
}

fn error_from_body(status: StatusCode, text: &str) -> ApiError {
    let body: ErrorBody = serde_json::from_str(text).unwrap_or_default();

    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::BAD_REQUEST => ApiError::Rejected {
            message: body.error,
            fields: body
                .errors
                .into_iter()
                .map(|e| (e.field, e.message))
                .collect(),
        },
        _ => ApiError::Status {
            status,
            message: body.error.unwrap_or_else(|| text.trim().to_string()),
        },
    }
}
