//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;
use frcc_shared::utils::{mask_email, validation::is_valid_email};

use crate::domain::entities::confirmation_token::{hash_confirmation_token, ConfirmationToken};
use crate::domain::entities::job_message::{
    JobMessage, OTP_EMAIL_JOB, VERIFICATION_EMAIL_JOB, WELCOME_EMAIL_JOB,
};
use crate::domain::entities::otp::OneTimePasscode;
use crate::domain::entities::session::SessionToken;
use crate::domain::entities::user::{RegistrationProfile, User};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::messaging::JobQueue;
use crate::services::session::SessionTokenService;

use super::config::AuthServiceConfig;

/// Authentication service driving registration, confirmation and passcode login
///
/// Follow-up emails are never sent inline: each transition enqueues a named
/// job that the job runner picks up.
pub struct AuthService<U, Q>
where
    U: UserRepository + ?Sized,
    Q: JobQueue + ?Sized,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Queue receiving follow-up jobs
    job_queue: Arc<Q>,
    /// Token service for session JWTs
    token_service: Arc<SessionTokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, Q> AuthService<U, Q>
where
    U: UserRepository + ?Sized,
    Q: JobQueue + ?Sized,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `job_queue` - Queue receiving email jobs
    /// * `token_service` - Service issuing session tokens
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        job_queue: Arc<Q>,
        token_service: Arc<SessionTokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            job_queue,
            token_service,
            config,
        }
    }

    /// Register a new user and enqueue the verification email
    ///
    /// This method:
    /// 1. Validates the profile
    /// 2. Rejects the registration when the email or the phone is already known
    /// 3. Stores the user, unconfirmed, with the digest of a fresh confirmation token
    /// 4. Enqueues a `verification_email` job carrying the plain token
    ///
    /// When step 4 fails the error is returned and the stored user is kept.
    pub async fn register(&self, profile: RegistrationProfile) -> DomainResult<User> {
        let profile = self.normalize_profile(profile)?;

        if self
            .user_repository
            .find_by_email_or_phone(&profile.email, Some(&profile.phone))
            .await?
            .is_some()
        {
            tracing::warn!(
                email = %mask_email(&profile.email),
                "Registration rejected, email or phone already registered"
            );
            return Err(AuthError::UserAlreadyExists.into());
        }

        let token = ConfirmationToken::generate();
        let user = self
            .user_repository
            .create(User::register(profile, token.hash()))
            .await?;

        tracing::info!(user_id = %user.id, email = %mask_email(&user.email), "User registered");

        let job = JobMessage::new(VERIFICATION_EMAIL_JOB)
            .with("email", user.email.as_str())
            .with("token", token.as_str());
        self.enqueue(&job).await?;

        Ok(user)
    }

    /// Confirm a pending registration and enqueue the welcome email
    ///
    /// Fails with `InvalidConfirmationToken` when no pending registration
    /// holds the token, which includes a token that was already redeemed.
    pub async fn confirm(&self, token: &str) -> DomainResult<User> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "token".to_string(),
            }
            .into());
        }

        let user = self
            .user_repository
            .confirm_registration(&hash_confirmation_token(token))
            .await?
            .ok_or(AuthError::InvalidConfirmationToken)?;

        tracing::info!(user_id = %user.id, email = %mask_email(&user.email), "Registration confirmed");

        let job = JobMessage::new(WELCOME_EMAIL_JOB)
            .with("email", user.email.as_str())
            .with("name", user.display_name());
        self.enqueue(&job).await?;

        Ok(user)
    }

    /// Start a login by emailing a one-time passcode
    ///
    /// Only confirmed accounts may log in. Each call replaces the previous
    /// passcode, which stays valid for `otp_validity_seconds`.
    pub async fn login(&self, email: &str) -> DomainResult<()> {
        let email = email.trim();
        let user = self.find_user(email).await?;

        if !user.is_confirmed {
            tracing::warn!(email = %mask_email(email), "Login attempt on unconfirmed account");
            return Err(AuthError::AccountNotConfirmed.into());
        }

        let otp = OneTimePasscode::issue(Utc::now(), self.config.otp_validity_seconds);
        if !self.user_repository.set_current_otp(&user.email, &otp).await? {
            return Err(AuthError::UserNotFound.into());
        }

        tracing::info!(
            user_id = %user.id,
            expires_at = %otp.expires_at,
            "Login passcode issued"
        );

        let job = JobMessage::new(OTP_EMAIL_JOB)
            .with("email", user.email.as_str())
            .with("otp", otp.code.as_str())
            .with("name", user.display_name());
        self.enqueue(&job).await
    }

    /// Check a login passcode and open a session
    ///
    /// The passcode must be the one most recently issued, must not be expired
    /// and must match exactly.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> DomainResult<SessionToken> {
        let email = email.trim();
        let user = self.find_user(email).await?;

        if let Err(err) = user.check_otp(otp, Utc::now()) {
            tracing::warn!(email = %mask_email(email), reason = %err, "Passcode rejected");
            return Err(err.into());
        }

        let session = self.token_service.issue(&user)?;
        tracing::info!(user_id = %user.id, "Session opened");

        Ok(session)
    }

    async fn find_user(&self, email: &str) -> DomainResult<User> {
        if email.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }

        self.user_repository
            .find_by_email_or_phone(email, None)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    async fn enqueue(&self, job: &JobMessage) -> DomainResult<()> {
        self.job_queue.send(job).await.map_err(|message| {
            tracing::error!(job = job.job().unwrap_or_default(), error = %message, "Failed to enqueue job");
            DomainError::Queue { message }
        })
    }

    fn normalize_profile(&self, profile: RegistrationProfile) -> DomainResult<RegistrationProfile> {
        let profile = RegistrationProfile {
            first_name: profile.first_name.trim().to_string(),
            last_name: profile.last_name.trim().to_string(),
            email: profile.email.trim().to_string(),
            phone: profile.phone.trim().to_string(),
            quality: profile.quality.trim().to_string(),
            organization: profile.organization.trim().to_string(),
        };

        for (field, value) in [
            ("first_name", &profile.first_name),
            ("last_name", &profile.last_name),
            ("email", &profile.email),
            ("phone", &profile.phone),
        ] {
            if value.is_empty() {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                }
                .into());
            }
        }

        for (field, value) in [
            ("first_name", &profile.first_name),
            ("last_name", &profile.last_name),
            ("email", &profile.email),
            ("quality", &profile.quality),
            ("organization", &profile.organization),
        ] {
            if value.chars().count() > self.config.max_field_length {
                return Err(ValidationError::TooLong {
                    field: field.to_string(),
                    max: self.config.max_field_length,
                }
                .into());
            }
        }

        if profile.phone.chars().count() > self.config.max_phone_length {
            return Err(ValidationError::TooLong {
                field: "phone".to_string(),
                max: self.config.max_phone_length,
            }
            .into());
        }

        if !is_valid_email(&profile.email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        Ok(profile)
    }
}
