use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CLASSROOM_API_BASE: &str = "https://classroom.googleapis.com";
pub const DEFAULT_GMAIL_API_BASE: &str = "https://gmail.googleapis.com";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub classroom_api_base: String,
    pub gmail_api_base: String,
    pub gemini: GeminiConfig,
    pub upstream_timeout: Duration,
}

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GEMINI_API_KEY")
            .ok_or_else(|| AppError::Config("GEMINI_API_KEY is not set".to_string()))?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;

        let upstream_timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("UPSTREAM_TIMEOUT_SECS is invalid: {}", e))
            })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            classroom_api_base: trim_base(
                get("CLASSROOM_API_BASE").unwrap_or_else(|| DEFAULT_CLASSROOM_API_BASE.to_string()),
            ),
            gmail_api_base: trim_base(
                get("GMAIL_API_BASE").unwrap_or_else(|| DEFAULT_GMAIL_API_BASE.to_string()),
            ),
            gemini: GeminiConfig {
                api_base: trim_base(
                    get("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
                ),
                api_key,
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            },
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        })
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
