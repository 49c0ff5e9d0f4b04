use std::sync::Arc;

use tracing::info;

use crate::auth::CredentialContext;
use crate::error::AppError;
use crate::gmail::{HtmlMessage, MailApi};
use crate::models::SendEmailRequest;

pub struct EmailService {
    mail: Arc<dyn MailApi>,
}

impl EmailService {
    pub fn new(mail: Arc<dyn MailApi>) -> Self {
        Self { mail }
    }

    /// Sends an HTML email as the signed-in user and returns the message id.
    pub async fn send(&self, credentials: &CredentialContext, req: SendEmailRequest) -> Result<String, AppError> {
        let token = credentials.require()?;

        for (field, value) in [("to", &req.to), ("subject", &req.subject)] {
            if value.contains(['\r', '\n']) {
                return Err(AppError::BadRequest(format!("{} must not contain line breaks", field)));
            }
        }

        let message = HtmlMessage::new(req.to, req.subject, req.body);
        let message_id = self
            .mail
            .send_raw(token, &message.to_raw())
            .await
            .map_err(AppError::dependency("Failed to send email"))?;

        info!("Email sent, message id {}", message_id);
        Ok(message_id)
    }
}
