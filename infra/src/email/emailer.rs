//! Job-facing emailer: renders a template and hands it to a transport.

use std::sync::Arc;

use async_trait::async_trait;

use frcc_core::services::messaging::{OtpEmailSender, VerificationEmailSender, WelcomeEmailSender};
use frcc_shared::EmailConfig;

use super::email_service::{EmailService, OutboundEmail};
use super::templates::EmailTemplate;

/// Sends the transactional emails of the registration flow
pub struct Emailer {
    transport: Arc<dyn EmailService>,
    from: String,
    base_url: String,
    website: String,
}

impl Emailer {
    pub fn new(transport: Arc<dyn EmailService>, config: &EmailConfig) -> Self {
        Self {
            transport,
            from: config.sender(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            website: config.website.clone(),
        }
    }

    /// Link the verification email points to
    pub fn confirmation_url(&self, token: &str) -> String {
        format!("{}/register/confirm/{}", self.base_url, token)
    }

    async fn deliver(
        &self,
        to: &str,
        template: EmailTemplate,
        keywords: &[(&str, &str)],
    ) -> Result<String, String> {
        let rendered = template.render(keywords);
        let email = OutboundEmail {
            from: self.from.clone(),
            to: to.to_string(),
            subject: rendered.subject,
            html_body: rendered.html_body,
            text_body: rendered.text_body,
        };

        self.transport
            .send_email(&email)
            .await
            .map_err(|e| format!("{} ({})", e, self.transport.provider_name()))
    }
}

#[async_trait]
impl VerificationEmailSender for Emailer {
    async fn send_verification_email(&self, email: &str, token: &str) -> Result<String, String> {
        let action_url = self.confirmation_url(token);
        self.deliver(
            email,
            EmailTemplate::Verification,
            &[("base_url", self.base_url.as_str()), ("action_url", action_url.as_str())],
        )
        .await
    }
}

#[async_trait]
impl WelcomeEmailSender for Emailer {
    async fn send_welcome_email(&self, email: &str, name: &str) -> Result<String, String> {
        self.deliver(
            email,
            EmailTemplate::Welcome,
            &[("email", email), ("name", name), ("website", self.website.as_str())],
        )
        .await
    }
}

#[async_trait]
impl OtpEmailSender for Emailer {
    async fn send_otp_email(&self, email: &str, otp: &str, name: &str) -> Result<String, String> {
        self.deliver(
            email,
            EmailTemplate::Otp,
            &[
                ("otp", otp),
                ("email", email),
                ("name", name),
                ("website", self.website.as_str()),
            ],
        )
        .await
    }
}
