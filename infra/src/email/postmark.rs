//! Postmark email transport
//!
//! Sends through `POST {api}/email` on the transactional (`outbound`) message
//! stream. Any status above 299 is a failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use frcc_shared::masking::mask_email;

use super::email_service::{EmailService, OutboundEmail};
use crate::InfrastructureError;

/// Postmark stream for transactional messages
pub const TRANSACTIONAL_MESSAGE_STREAM: &str = "outbound";

/// Postmark HTTP API client
pub struct PostmarkEmailService {
    http_client: Client,
    base_url: String,
    server_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
    message_stream: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    #[serde(rename = "MessageID")]
    message_id: Option<String>,
}

impl PostmarkEmailService {
    pub fn new(
        base_url: impl Into<String>,
        server_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InfrastructureError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            server_token: server_token.into(),
        })
    }
}

#[async_trait]
impl EmailService for PostmarkEmailService {
    async fn send_email(&self, email: &OutboundEmail) -> Result<String, InfrastructureError> {
        let url = format!("{}/email", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html_body: &email.html_body,
            text_body: &email.text_body,
            message_stream: TRANSACTIONAL_MESSAGE_STREAM,
        };

        let response = self
            .http_client
            .post(&url)
            .header("Accept", "application/json")
            .header("X-Postmark-Server-Token", &self.server_token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() > 299 {
            warn!(
                status = status.as_u16(),
                response = %body,
                to = %mask_email(&email.to),
                "Error sending email"
            );
            return Err(InfrastructureError::Email(format!(
                "error sending email, got status {}",
                status.as_u16()
            )));
        }

        let message_id = serde_json::from_str::<SendEmailResponse>(&body)
            .ok()
            .and_then(|response| response.message_id)
            .unwrap_or_default();

        debug!(to = %mask_email(&email.to), message_id = %message_id, "Postmark accepted email");
        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Postmark"
    }
}
