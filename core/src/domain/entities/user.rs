//! User entity representing an event registrant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::otp::OneTimePasscode;
use crate::errors::AuthError;

/// Profile submitted at registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Role or title of the registrant within their organization
    pub quality: String,
    pub organization: String,
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    pub first_name: String,

    pub last_name: String,

    /// Login identifier, unique across users
    pub email: String,

    /// Phone number, unique across users
    pub phone: String,

    pub quality: String,

    pub organization: String,

    /// SHA-256 digest of the confirmation token sent at registration
    #[serde(skip_serializing, default)]
    pub confirmation_token_hash: String,

    /// Whether the registration was confirmed through the emailed link
    pub is_confirmed: bool,

    /// Passcode issued by the most recent login request
    #[serde(skip_serializing, default)]
    pub current_otp: Option<OneTimePasscode>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unconfirmed user from a registration profile
    pub fn register(profile: RegistrationProfile, confirmation_token_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone: profile.phone,
            quality: profile.quality,
            organization: profile.organization,
            confirmation_token_hash,
            is_confirmed: false,
            current_otp: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the registration as confirmed
    pub fn confirm(&mut self) {
        self.is_confirmed = true;
        self.updated_at = Utc::now();
    }

    /// Replaces any previous passcode
    pub fn set_otp(&mut self, otp: OneTimePasscode) {
        self.current_otp = Some(otp);
        self.updated_at = Utc::now();
    }

    /// Checks a submitted passcode against the current one at `now`
    pub fn check_otp(&self, candidate: &str, now: DateTime<Utc>) -> Result<(), AuthError> {
        let otp = self.current_otp.as_ref().ok_or(AuthError::OtpNotIssued)?;

        if otp.is_expired_at(now) {
            return Err(AuthError::OtpExpired);
        }

        if !otp.matches(candidate) {
            return Err(AuthError::InvalidOtp);
        }

        Ok(())
    }

    /// Name used to greet the user in emails
    pub fn display_name(&self) -> &str {
        if self.first_name.trim().is_empty() {
            &self.email
        } else {
            &self.first_name
        }
    }
}
