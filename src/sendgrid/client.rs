//! SendGrid API client module
//!
//! Sends rendered [`EmailMessage`]s through the SendGrid v3 mail/send API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::core::models::EmailMessage;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Explicit failure value returned by the send step.
///
/// The notifier never propagates delivery failures to the platform, so the
/// failure travels as a plain value the handler can log and drop. When
/// SendGrid returned a diagnostic body with a non-2xx status, it is carried
/// here so the handler can log it separately.
#[derive(Debug)]
pub struct SendFailure {
    pub message: String,
    pub response_body: Option<String>,
}

impl std::fmt::Display for SendFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Seam for the email-delivery backend.
#[async_trait]
pub trait MailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), SendFailure>;
}

/// SendGrid API client for sending notification emails.
pub struct SendGridClient {
    api_key: String,
}

impl SendGridClient {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl MailSender for SendGridClient {
    /// Fire-and-forget delivery: one request, no retries.
    async fn send(&self, message: &EmailMessage) -> Result<(), SendFailure> {
        let request_body = json!({
            "personalizations": [{
                "to": [{ "email": message.to }]
            }],
            "from": {
                "email": message.from_email,
                "name": message.from_name
            },
            "subject": message.subject,
            "content": [{
                "type": "text/html",
                "value": message.html
            }]
        });

        let client = Client::new();
        let response = client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SendFailure {
                message: format!("SendGrid request failed: {e}"),
                response_body: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            return Err(SendFailure {
                message: format!("SendGrid API error (status {status})"),
                response_body: body,
            });
        }

        Ok(())
    }
}
