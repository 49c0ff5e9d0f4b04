use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

/// An HTML message ready to be rendered as RFC 2822 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl HtmlMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn render(&self) -> String {
        [
            "Content-Type: text/html; charset=UTF-8".to_string(),
            "MIME-Version: 1.0".to_string(),
            format!("To: {}", self.to),
            format!("Subject: {}", encode_header_value(&self.subject)),
            String::new(),
            self.body.clone(),
        ]
        .join("\r\n")
    }

    /// The `raw` field Gmail expects: URL-safe base64 with padding stripped.
    pub fn to_raw(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.render())
    }
}

/// Non-ASCII header text becomes an RFC 2047 encoded word.
fn encode_header_value(value: &str) -> String {
    if value.is_ascii() {
        value.to_string()
    } else {
        format!("=?UTF-8?B?{}?=", STANDARD.encode(value))
    }
}
