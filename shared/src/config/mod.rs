//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Session token signing and cookie configuration
//! - `database` - Database connection and pool configuration
//! - `email` - Transactional email provider and sender identity
//! - `environment` - Environment detection and logging configuration
//! - `queue` - Job queue provider configuration
//! - `server` - HTTP server configuration
//!
//! Every section is read from environment variables through `from_env()`.
//! Callers load an optional `.env` file (dotenvy) before building the config.

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod queue;
pub mod server;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, SessionConfig};
pub use database::DatabaseConfig;
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use queue::{QueueConfig, QueueProvider};
pub use server::ServerConfig;

/// Configuration problems detected at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    Missing { key: String },

    #[error("Invalid configuration for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Session token and cookie configuration
    pub auth: AuthConfig,

    /// Job queue configuration
    pub queue: QueueConfig,

    /// Transactional email configuration
    pub email: EmailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            queue: QueueConfig::default(),
            email: EmailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            queue: QueueConfig::from_env(),
            email: EmailConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Check the combination of settings before any service is started
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET".to_string(),
                message: "the default secret cannot be used in production".to_string(),
            });
        }

        if self.environment.is_production() && self.email.is_using_default_base_url() {
            return Err(ConfigError::Invalid {
                key: "BASE_URL".to_string(),
                message: "confirmation links must point at the public front end".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(ConfigError::Invalid {
                key: "PORT".to_string(),
                message: "port must be greater than zero".to_string(),
            });
        }

        self.queue.validate()?;
        self.email.validate()
    }
}

/// Read an environment variable, falling back to `default` when unset or unparsable
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Read an environment variable as a non-empty string
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
