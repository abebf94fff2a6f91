//! Configuration for the authentication service

use crate::domain::entities::otp::OTP_VALIDITY_SECONDS;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// How long a login passcode stays valid, in seconds
    pub otp_validity_seconds: i64,
    /// Maximum length of free-text profile fields
    pub max_field_length: usize,
    /// Maximum length of a phone number
    pub max_phone_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            otp_validity_seconds: OTP_VALIDITY_SECONDS,
            max_field_length: 255,
            max_phone_length: 32,
        }
    }
}
