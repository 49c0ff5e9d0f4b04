use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::AppError;

/// Failure talking to one of the Google APIs.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("upstream returned no usable content")]
    EmptyResponse,

    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
}

pub fn build_http_client(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))
}

/// Reads the body of a response, failing on non-2xx and decoding JSON into `T`.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    let status = response.status();
    let body_text = response.text().await?;

    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            body: body_text,
        });
    }

    // an empty 2xx body decodes like `{}`
    let body_text = if body_text.trim().is_empty() { "{}" } else { body_text.as_str() };
    Ok(serde_json::from_str::<T>(body_text)?)
}
