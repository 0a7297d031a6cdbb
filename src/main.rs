// src/main.rs

use std::sync::Arc;

use content_admin::api::HttpArticleApi;
use content_admin::config::Config;
use content_admin::routes;
use content_admin::state::AppState;
use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "admin.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Article API client
    let api = HttpArticleApi::new(&config.api_base_url, config.api_timeout())
        .expect("ARTICLE_API_URL must be a valid URL");
    tracing::info!("Using article API at {}", config.api_base_url);

    let state = AppState {
        api: Arc::new(api),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listening address");
    tracing::info!("Content Manager listening on {}", addr);

    // Start the server
    axum::serve(listener, app).await.expect("Server error");
}
