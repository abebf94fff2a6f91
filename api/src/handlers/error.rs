//! Mapping of failures to HTTP responses
//!
//! Every failure surfaced by the API is a `400 Bad Request` with a plain
//! text body. Failures caused by the request carry their own message,
//! failures of a dependency are logged with detail and answered generically.

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use frcc_core::errors::DomainError;

/// Message returned when a dependency failed while handling the request
pub const GENERIC_FAILURE_MESSAGE: &str = "Request could not be processed";

/// Error type returned by every route handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded or failed validation
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// Text sent back to the client
    pub fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Domain(err) if err.is_client_error() => err.to_string(),
            ApiError::Domain(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    fn log(&self) {
        match self {
            ApiError::BadRequest(message) => {
                tracing::warn!(error = %message, "Rejected malformed request");
            }
            ApiError::Domain(err) if err.is_client_error() => {
                tracing::warn!(error = %err, "Request rejected");
            }
            ApiError::Domain(err) => {
                tracing::error!(error = ?err, "Request failed");
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(validation_message(&errors))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        self.log();
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.public_message())
    }
}

/// Flattens validator output to `field: code` pairs, sorted by field
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let reason = errors
                .first()
                .map(|e| e.code.to_string())
                .unwrap_or_else(|| "invalid".to_string());
            format!("{}: {}", field, reason)
        })
        .collect();
    fields.sort();

    format!("Invalid request: {}", fields.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use frcc_core::errors::{AuthError, ValidationError};
    use validator::Validate;

    use crate::dto::LoginRequest;

    async fn body_of(err: ApiError) -> (StatusCode, String, String) {
        let response = err.error_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_client_error_keeps_message() {
        let (status, content_type, body) =
            body_of(ApiError::from(DomainError::Auth(AuthError::InvalidOtp))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, "Invalid login code");
    }

    #[actix_web::test]
    async fn test_validation_error_keeps_message() {
        let (_, _, body) =
            body_of(ApiError::from(DomainError::from(ValidationError::InvalidEmail))).await;
        assert_eq!(body, "Invalid email format");
    }

    #[actix_web::test]
    async fn test_internal_error_is_hidden() {
        let err = ApiError::from(DomainError::Internal {
            message: "connection refused on 10.0.0.4".to_string(),
        });
        let (status, _, body) = body_of(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, GENERIC_FAILURE_MESSAGE);
    }

    #[actix_web::test]
    async fn test_queue_error_is_hidden() {
        let err = ApiError::from(DomainError::Queue {
            message: "queue unavailable".to_string(),
        });
        let (_, _, body) = body_of(err).await;
        assert_eq!(body, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_validation_message() {
        let request = LoginRequest {
            email: String::new(),
        };
        let errors = request.validate().unwrap_err();

        assert_eq!(validation_message(&errors), "Invalid request: email: length");
    }
}
