use std::convert::Infallible;
use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header::AUTHORIZATION, request::Parts};

use crate::error::AppError;

/// Opaque OAuth2 bearer token issued to the signed-in user.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Credentials attached to the current request. Extraction never fails;
/// handlers decide whether an absent token is an error.
#[derive(Clone, Debug, Default)]
pub struct CredentialContext {
    token: Option<AccessToken>,
}

impl CredentialContext {
    pub fn new(token: Option<AccessToken>) -> Self {
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_bearer)
            .map(AccessToken::new);
        Self { token }
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub fn require(&self) -> Result<&AccessToken, AppError> {
        self.token.as_ref().ok_or(AppError::Unauthorized)
    }
}

fn parse_bearer(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}

impl<S> FromRequestParts<S> for CredentialContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
