//! Domain-specific error types for registration, login and job handling

use thiserror::Error;

/// Registration and login errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("A user with this email or phone already exists")]
    UserAlreadyExists,

    #[error("Invalid or already used confirmation token")]
    InvalidConfirmationToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Account registration has not been confirmed")]
    AccountNotConfirmed,

    #[error("No login code was requested for this account")]
    OtpNotIssued,

    #[error("Login code expired")]
    OtpExpired,

    #[error("Invalid login code")]
    InvalidOtp,
}

/// Session token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid length for field: {field} (max: {max})")]
    TooLong { field: String, max: usize },

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Errors raised while running a queued job
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("Job payload is missing field: {field}")]
    MissingField { field: String },

    #[error("Failed to send email: {message}")]
    Email { message: String },

    #[error("Job failed: {message}")]
    Failed { message: String },
}
