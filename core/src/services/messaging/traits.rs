//! Capability traits for the job queue and transactional emails
//!
//! Each email kind is its own trait so a job handler depends only on the one
//! operation it performs.

use async_trait::async_trait;

use super::types::ReceivedJob;
use crate::domain::entities::job_message::JobMessage;

/// Trait for job queue integration
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Enqueue a job message
    async fn send(&self, message: &JobMessage) -> Result<(), String>;

    /// Long-poll for the next message; `Ok(None)` when the wait elapsed without one
    async fn receive(&self) -> Result<Option<ReceivedJob>, String>;

    /// Acknowledge a processed message so it is not redelivered
    async fn delete(&self, receipt: &str) -> Result<(), String>;
}

/// Sends the link that confirms a registration
#[async_trait]
pub trait VerificationEmailSender: Send + Sync {
    /// Returns the provider's message identifier
    async fn send_verification_email(&self, email: &str, token: &str) -> Result<String, String>;
}

/// Greets a user once their registration is confirmed
#[async_trait]
pub trait WelcomeEmailSender: Send + Sync {
    /// Returns the provider's message identifier
    async fn send_welcome_email(&self, email: &str, name: &str) -> Result<String, String>;
}

/// Delivers a login passcode
#[async_trait]
pub trait OtpEmailSender: Send + Sync {
    /// Returns the provider's message identifier
    async fn send_otp_email(&self, email: &str, otp: &str, name: &str) -> Result<String, String>;
}
