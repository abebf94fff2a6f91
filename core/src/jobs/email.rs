//! Jobs that send the transactional emails of the registration flow.

use std::sync::Arc;

use async_trait::async_trait;
use frcc_shared::utils::mask_email;

use super::job::Job;
use super::registry::JobRegistry;
use crate::domain::entities::job_message::{
    JobMessage, OTP_EMAIL_JOB, VERIFICATION_EMAIL_JOB, WELCOME_EMAIL_JOB,
};
use crate::errors::JobError;
use crate::services::messaging::{OtpEmailSender, VerificationEmailSender, WelcomeEmailSender};

/// Sends the confirmation link. Payload: `email`, `token`.
pub struct VerificationEmailJob<S: VerificationEmailSender + ?Sized> {
    sender: Arc<S>,
}

impl<S: VerificationEmailSender + ?Sized> VerificationEmailJob<S> {
    pub fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl<S: VerificationEmailSender + ?Sized> Job for VerificationEmailJob<S> {
    fn name(&self) -> &str {
        VERIFICATION_EMAIL_JOB
    }

    async fn run(&self, message: &JobMessage) -> Result<(), JobError> {
        let email = message.require("email")?;
        let token = message.require("token")?;

        let message_id = self
            .sender
            .send_verification_email(email, token)
            .await
            .map_err(|message| JobError::Email { message })?;

        tracing::info!(email = %mask_email(email), message_id = %message_id, "Verification email sent");
        Ok(())
    }
}

/// Greets a confirmed user. Payload: `email`, optional `name`.
pub struct WelcomeEmailJob<S: WelcomeEmailSender + ?Sized> {
    sender: Arc<S>,
}

impl<S: WelcomeEmailSender + ?Sized> WelcomeEmailJob<S> {
    pub fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl<S: WelcomeEmailSender + ?Sized> Job for WelcomeEmailJob<S> {
    fn name(&self) -> &str {
        WELCOME_EMAIL_JOB
    }

    async fn run(&self, message: &JobMessage) -> Result<(), JobError> {
        let email = message.require("email")?;
        let name = message.get("name").unwrap_or(email);

        let message_id = self
            .sender
            .send_welcome_email(email, name)
            .await
            .map_err(|message| JobError::Email { message })?;

        tracing::info!(email = %mask_email(email), message_id = %message_id, "Welcome email sent");
        Ok(())
    }
}

/// Delivers a login passcode. Payload: `email`, `otp`, optional `name`.
pub struct OtpEmailJob<S: OtpEmailSender + ?Sized> {
    sender: Arc<S>,
}

impl<S: OtpEmailSender + ?Sized> OtpEmailJob<S> {
    pub fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl<S: OtpEmailSender + ?Sized> Job for OtpEmailJob<S> {
    fn name(&self) -> &str {
        OTP_EMAIL_JOB
    }

    async fn run(&self, message: &JobMessage) -> Result<(), JobError> {
        let email = message.require("email")?;
        let otp = message.require("otp")?;
        let name = message.get("name").unwrap_or(email);

        let message_id = self
            .sender
            .send_otp_email(email, otp, name)
            .await
            .map_err(|message| JobError::Email { message })?;

        tracing::info!(email = %mask_email(email), message_id = %message_id, "Passcode email sent");
        Ok(())
    }
}

/// Register the three email jobs against one sender
pub fn register_email_jobs<E>(registry: &mut JobRegistry, sender: Arc<E>) -> &mut JobRegistry
where
    E: VerificationEmailSender + WelcomeEmailSender + OtpEmailSender + 'static,
{
    registry
        .register(Arc::new(VerificationEmailJob::new(sender.clone())))
        .register(Arc::new(WelcomeEmailJob::new(sender.clone())))
        .register(Arc::new(OtpEmailJob::new(sender)))
}
