//! Configuration module for the retreat client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::errors::{ClientError, ClientResult};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST backend
    pub api_url: Url,
    /// Base URL of the image/file server
    pub files_url: Url,
    /// Bearer token sent with every request
    pub api_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();

        let api_url = env::var("RETREAT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = parse_url("RETREAT_API_URL", &api_url)?;

        let files_url = match env::var("RETREAT_FILES_URL") {
            Ok(raw) => parse_url("RETREAT_FILES_URL", &raw)?,
            Err(_) => api_url.clone(),
        };

        let api_token = env::var("RETREAT_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let timeout = match env::var("RETREAT_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|_| {
                ClientError::Config(format!("RETREAT_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let log_level = env::var("RETREAT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("RETREAT_LOG_JSON")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            api_url,
            files_url,
            api_token,
            timeout,
            log_level,
            log_json,
        })
    }

    /// Configuration pointing both API and file server at one base URL.
    pub fn for_base_url(base_url: &str) -> ClientResult<Self> {
        let api_url = parse_url("base url", base_url)?;
        Ok(Self {
            files_url: api_url.clone(),
            api_url,
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: "info".to_string(),
            log_json: false,
        })
    }
}

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn parse_url(name: &str, raw: &str) -> ClientResult<Url> {
    Url::parse(raw).map_err(|e| ClientError::Config(format!("{} is not a valid URL: {}", name, e)))
}
