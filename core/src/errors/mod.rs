//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, JobError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Queue error: {message}")]
    Queue { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Whether the error was caused by the request rather than a failing dependency
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::Auth(_) | DomainError::ValidationErr(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
#[path = "tests/domain_error_tests.rs"]
mod tests;
