//! # Infrastructure Layer
//!
//! Concrete adapters for the FRCC registration backend:
//!
//! - **Database**: MySQL user store using SQLx
//! - **Queue**: Amazon SQS job queue and a process-local queue
//! - **Email**: Postmark transport, a mock transport and the templated [`email::Emailer`]
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `sqs`: Enable the Amazon SQS job queue (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email module - transports, templates and the job-facing emailer
pub mod email;

/// Queue module - job queue backends
pub mod queue;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Job queue error
    #[error("Queue error: {0}")]
    Queue(String),

    /// Email provider error
    #[error("Email service error: {0}")]
    Email(String),
}
