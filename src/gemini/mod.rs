pub mod dto;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::GeminiConfig;
use crate::upstream::{UpstreamError, decode_json};

/// A hosted text model: one prompt in, generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}

pub struct GeminiHttpClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiHttpClient {
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl TextGenerator for GeminiHttpClient {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&dto::GenerateContentRequest::user_text(prompt.to_string()))
            .send()
            .await?;

        let parsed: dto::GenerateContentResponse = decode_json(response).await?;
        parsed.first_text().ok_or(UpstreamError::EmptyResponse)
    }
}
