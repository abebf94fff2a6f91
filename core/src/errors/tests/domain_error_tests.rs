//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, JobError, TokenError, ValidationError};

#[test]
fn test_auth_errors_bridge_transparently() {
    let error: DomainError = AuthError::UserAlreadyExists.into();
    assert_eq!(
        error.to_string(),
        "A user with this email or phone already exists"
    );
    assert!(error.is_client_error());
}

#[test]
fn test_validation_error_with_fields() {
    let error: DomainError = ValidationError::RequiredField {
        field: "email".to_string(),
    }
    .into();
    assert_eq!(error.to_string(), "Field required: email");
    assert!(error.is_client_error());
}

#[test]
fn test_dependency_failures_are_not_client_errors() {
    let internal = DomainError::Internal {
        message: "connection refused".to_string(),
    };
    let queue = DomainError::Queue {
        message: "throttled".to_string(),
    };
    let token: DomainError = TokenError::TokenGenerationFailed.into();

    assert!(!internal.is_client_error());
    assert!(!queue.is_client_error());
    assert!(!token.is_client_error());
}

#[test]
fn test_client_errors_are_auth_and_validation_only() {
    let errors = [
        DomainError::from(AuthError::InvalidOtp),
        DomainError::from(ValidationError::InvalidEmail),
        DomainError::from(TokenError::InvalidClaims),
        DomainError::Internal {
            message: "db".to_string(),
        },
        DomainError::Queue {
            message: "sqs".to_string(),
        },
    ];

    for error in &errors {
        let expected = match error {
            DomainError::Auth(_) | DomainError::ValidationErr(_) => true,
            DomainError::Token(_) | DomainError::Internal { .. } | DomainError::Queue { .. } => {
                false
            }
        };
        assert_eq!(error.is_client_error(), expected, "{:?}", error);
    }
}

#[test]
fn test_job_error_messages() {
    let error = JobError::MissingField {
        field: "token".to_string(),
    };
    assert_eq!(error.to_string(), "Job payload is missing field: token");

    let error = JobError::Email {
        message: "status 422".to_string(),
    };
    assert!(error.to_string().contains("status 422"));
}
