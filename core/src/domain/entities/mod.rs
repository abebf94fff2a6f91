//! Domain entities representing core business objects.

pub mod confirmation_token;
pub mod job_message;
pub mod otp;
pub mod session;
pub mod user;

// Re-export commonly used types
pub use confirmation_token::{hash_confirmation_token, ConfirmationToken};
pub use job_message::{
    JobMessage, JOB_KEY, OTP_EMAIL_JOB, VERIFICATION_EMAIL_JOB, WELCOME_EMAIL_JOB,
};
pub use otp::{OneTimePasscode, OTP_LENGTH, OTP_VALIDITY_SECONDS};
pub use session::{Claims, SessionToken, JWT_AUDIENCE, JWT_ISSUER, SESSION_EXPIRY_HOURS};
pub use user::{RegistrationProfile, User};
