//! CORS middleware configuration for cross-origin requests.
//!
//! The registration pages are served from other origins than the API, and
//! the session cookie has to travel with those requests, so credentials are
//! allowed for any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// How long browsers may cache a preflight answer, in seconds
pub const PREFLIGHT_MAX_AGE: usize = 300;

/// Creates the CORS middleware used by the application.
pub fn create_cors() -> Cors {
    tracing::debug!(max_age = PREFLIGHT_MAX_AGE, "Configuring CORS");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allowed_headers(vec![
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-csrf-token"),
        ])
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE)
}
