//! Email module
//!
//! - **Transport trait**: [`EmailService`], one implementation per provider
//! - **Postmark**: production delivery over the Postmark HTTP API
//! - **Mock**: logs instead of sending
//! - **Emailer**: renders the embedded templates for the email jobs

use std::sync::Arc;
use std::time::Duration;

pub mod email_service;
pub mod emailer;
pub mod mock_email;
pub mod postmark;
pub mod templates;

pub use email_service::{EmailService, OutboundEmail};
pub use emailer::Emailer;
pub use mock_email::MockEmailService;
pub use postmark::PostmarkEmailService;
pub use templates::{EmailTemplate, RenderedEmail};

use frcc_shared::{EmailConfig, EmailProvider};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create the email transport selected by the configuration
pub fn create_email_service(
    config: &EmailConfig,
) -> Result<Arc<dyn EmailService>, InfrastructureError> {
    match config.provider {
        EmailProvider::Mock => {
            tracing::warn!("Using mock email service, emails are logged and not sent");
            Ok(Arc::new(MockEmailService::new()))
        }
        EmailProvider::Postmark => {
            let token = config.postmark_token.as_deref().ok_or_else(|| {
                InfrastructureError::Config("POSTMARK_TOKEN is not set".to_string())
            })?;
            Ok(Arc::new(PostmarkEmailService::new(
                config.postmark_api_url.clone(),
                token,
                Duration::from_secs(config.timeout_seconds),
            )?))
        }
    }
}
