// tests/common/mod.rs

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use content_admin::{
    api::HttpArticleApi,
    config::Config,
    models::post::{Post, Status},
    routes,
    state::AppState,
};
use serde_json::{Value, json};

/// In-memory stand-in for the article REST API, speaking its wire format:
/// bare arrays (or `null`) for listings, bare posts by id, `{"data": ...}`
/// for writes and `created_date` / `updated_date` timestamps.
#[derive(Clone, Default)]
pub struct FakeArticles {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    posts: Vec<Post>,
    next_id: i64,
    /// `<status>?<raw query>` of every listing request.
    list_requests: Vec<String>,
    /// Bodies of every write, in order.
    writes: Vec<(String, Value)>,
    down: bool,
    reject_next: Option<Value>,
}

impl FakeArticles {
    pub fn seed(&self, title: &str, category: &str, status: Status) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        let now = chrono::Utc::now();
        inner.posts.push(Post {
            id,
            title: title.to_string(),
            content: long_content(),
            category: category.to_string(),
            status,
            created_at: Some(now),
            updated_at: Some(now),
        });
        id
    }

    pub fn post(&self, id: i64) -> Option<Post> {
        self.inner
            .lock()
            .unwrap()
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().posts.len()
    }

    pub fn list_requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().list_requests.clone()
    }

    pub fn writes(&self) -> Vec<(String, Value)> {
        self.inner.lock().unwrap().writes.clone()
    }

    /// Every request fails with 500 from now on.
    pub fn go_down(&self) {
        self.inner.lock().unwrap().down = true;
    }

    /// The next write answers 400 with this body.
    pub fn reject_next_write(&self, body: Value) {
        self.inner.lock().unwrap().reject_next = Some(body);
    }

    fn router(self) -> Router {
        Router::new()
            .route("/article", post(create))
            .route("/article/{param}", get(get_or_list).put(update))
            .with_state(self)
    }
}

fn wire(post: &Post) -> Value {
    json!({
        "id": post.id,
        "title": post.title,
        "content": post.content,
        "category": post.category,
        "status": post.status,
        "created_date": post.created_at,
        "updated_date": post.updated_at,
    })
}

fn unavailable() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to fetch articles" })),
    )
        .into_response()
}

async fn get_or_list(
    State(store): State<FakeArticles>,
    Path(param): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let mut inner = store.inner.lock().unwrap();
    if inner.down {
        return unavailable();
    }

    if let Ok(status) = param.parse::<Status>() {
        inner
            .list_requests
            .push(format!("{}?{}", status, raw.unwrap_or_default()));

        let limit = params
            .get("limit")
            .and_then(|l| l.parse::<usize>().ok())
            .filter(|l| *l > 0)
            .unwrap_or(10);
        let offset = params
            .get("offset")
            .and_then(|o| o.parse::<usize>().ok())
            .unwrap_or(0);

        let page: Vec<Value> = inner
            .posts
            .iter()
            .filter(|p| p.status == status)
            .skip(offset)
            .take(limit)
            .map(wire)
            .collect();

        if page.is_empty() {
            return Json(Value::Null).into_response();
        }
        return Json(Value::Array(page)).into_response();
    }

    let Ok(id) = param.parse::<i64>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid parameter" })),
        )
            .into_response();
    };

    match inner.posts.iter().find(|p| p.id == id) {
        Some(post) => Json(wire(post)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Article not found" })),
        )
            .into_response(),
    }
}

async fn create(State(store): State<FakeArticles>, Json(body): Json<Value>) -> Response {
    let mut inner = store.inner.lock().unwrap();
    if inner.down {
        return unavailable();
    }
    inner.writes.push(("POST /article".to_string(), body.clone()));
    if let Some(rejection) = inner.reject_next.take() {
        return (StatusCode::BAD_REQUEST, Json(rejection)).into_response();
    }

    let text = |key: &str| body[key].as_str().unwrap_or_default().to_string();
    let Ok(status) = text("status").parse::<Status>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "errors": [{ "field": "status", "message": "Status is required" }] })),
        )
            .into_response();
    };

    inner.next_id += 1;
    let now = chrono::Utc::now();
    let post = Post {
        id: inner.next_id,
        title: text("title"),
        content: text("content"),
        category: text("category"),
        status,
        created_at: Some(now),
        updated_at: Some(now),
    };
    let data = wire(&post);
    inner.posts.push(post);

    (StatusCode::CREATED, Json(json!({ "data": data }))).into_response()
}

async fn update(
    State(store): State<FakeArticles>,
    Path(param): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut inner = store.inner.lock().unwrap();
    if inner.down {
        return unavailable();
    }
    inner.writes.push((format!("PUT /article/{}", param), body.clone()));
    if let Some(rejection) = inner.reject_next.take() {
        return (StatusCode::BAD_REQUEST, Json(rejection)).into_response();
    }

    let Some(post) = param
        .parse::<i64>()
        .ok()
        .and_then(|id| inner.posts.iter_mut().find(|p| p.id == id))
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Article not found" })),
        )
            .into_response();
    };

    if let Some(title) = body["title"].as_str() {
        post.title = title.to_string();
    }
    if let Some(content) = body["content"].as_str() {
        post.content = content.to_string();
    }
    if let Some(category) = body["category"].as_str() {
        post.category = category.to_string();
    }
    if let Some(status) = body["status"].as_str() {
        match status.parse::<Status>() {
            Ok(status) => post.status = status,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Status must be Publish, Draft, or Thrash" })),
                )
                    .into_response();
            }
        }
    }
    post.updated_at = Some(chrono::Utc::now());

    (StatusCode::OK, Json(json!({ "data": wire(post) }))).into_response()
}

pub struct TestApp {
    pub address: String,
    pub store: FakeArticles,
    /// Does not follow redirects, so tests can assert on them.
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Spawns the fake article API and the admin app, each on a random port.
pub async fn spawn_app() -> TestApp {
    let store = FakeArticles::default();

    let upstream = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let api_url = format!("http://127.0.0.1:{}", upstream.local_addr().unwrap().port());
    let fake = store.clone().router();
    tokio::spawn(async move {
        axum::serve(upstream, fake).await.unwrap();
    });

    let config = Config {
        api_base_url: api_url.clone(),
        host: "127.0.0.1".to_string(),
        port: 0,
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        api_timeout_secs: 5,
        preview_page_size: 6,
    };

    let api = HttpArticleApi::new(&config.api_base_url, Duration::from_secs(5))
        .expect("Failed to build API client");
    let state = AppState {
        api: Arc::new(api),
        config,
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        store,
        client,
    }
}

/// A title that passes the 20 character minimum.
pub fn long_title(tag: &str) -> String {
    format!("{}-long-enough-for-the-rules", tag)
}

/// Content that passes the 200 character minimum.
pub fn long_content() -> String {
    "Lorem ipsum dolor sit amet. ".repeat(8)
}
