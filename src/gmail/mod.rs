pub mod mime;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::auth::AccessToken;
use crate::upstream::{UpstreamError, decode_json};

pub use self::mime::HtmlMessage;

/// Sends a pre-encoded message as the token's owner and returns the
/// provider-assigned message id.
#[async_trait]
pub trait MailApi: Send + Sync {
    async fn send_raw(&self, token: &AccessToken, raw: &str) -> Result<String, UpstreamError>;
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    raw: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageResponse {
    #[serde(default)]
    id: Option<String>,
}

pub struct GmailHttpClient {
    client: Client,
    base_url: String,
}

impl GmailHttpClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MailApi for GmailHttpClient {
    async fn send_raw(&self, token: &AccessToken, raw: &str) -> Result<String, UpstreamError> {
        let url = format!("{}/gmail/v1/users/me/messages/send", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(&SendMessageRequest { raw })
            .send()
            .await?;

        let sent: SendMessageResponse = decode_json(response).await?;
        sent.id
            .filter(|id| !id.is_empty())
            .ok_or(UpstreamError::EmptyResponse)
    }
}
