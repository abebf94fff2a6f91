//! Shared utilities and common types for the FRCC registration server
//!
//! This crate provides common functionality used across all server modules:
//! - Environment-driven configuration
//! - Response types shared by the HTTP layer
//! - Validation and log masking helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, EmailConfig, EmailProvider, Environment,
    JwtConfig, LogFormat, LoggingConfig, QueueConfig, QueueProvider, ServerConfig, SessionConfig,
};
pub use types::HealthResponse;
pub use utils::{masking, validation};
