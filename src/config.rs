// src/config.rs

use std::env;
use std::time::Duration;

use dotenvy::dotenv;

use crate::pagination::PREVIEW_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the article REST API.
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory for the daily rolling log file.
    pub log_dir: String,
    pub api_timeout_secs: u64,
    pub preview_page_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_base_url = env::var("ARTICLE_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let api_timeout_secs = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let preview_page_size = env::var("PREVIEW_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|size: &u32| *size > 0)
            .unwrap_or(PREVIEW_PAGE_SIZE);

        Self {
            api_base_url,
            host,
            port,
            rust_log,
            log_dir,
            api_timeout_secs,
            preview_page_size,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }
}
