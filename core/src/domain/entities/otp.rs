//! One-time passcode issued on login and redeemed for a session.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of digits in a passcode
pub const OTP_LENGTH: usize = 6;

/// Validity window of a passcode (2 minutes 30 seconds)
pub const OTP_VALIDITY_SECONDS: i64 = 150;

/// A numeric passcode together with the instant it stops being accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimePasscode {
    /// The zero-padded 6-digit code
    pub code: String,

    /// First instant at which the code is rejected
    pub expires_at: DateTime<Utc>,
}

impl OneTimePasscode {
    /// Issues a fresh random passcode valid for `validity_seconds` from `issued_at`
    pub fn issue(issued_at: DateTime<Utc>, validity_seconds: i64) -> Self {
        Self {
            code: Self::generate_code(),
            expires_at: issued_at + Duration::seconds(validity_seconds),
        }
    }

    /// Generates a random 6-digit code from the operating system RNG
    fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:0width$}", code, width = OTP_LENGTH)
    }

    /// Whether the passcode is no longer accepted at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Exact string comparison in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}
