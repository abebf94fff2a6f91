//! Email transport interface

use async_trait::async_trait;

use crate::InfrastructureError;

/// A fully rendered message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// `Name <address>` of the sender
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Email transport trait
///
/// Implementations include:
/// - Postmark HTTP API
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Deliver a message
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier of the accepted message
    /// * `Err(InfrastructureError)` - If the provider rejected it or could not be reached
    async fn send_email(&self, email: &OutboundEmail) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}
