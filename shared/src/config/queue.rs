//! Job queue configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or, ConfigError};

/// Backend used to carry job messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueProvider {
    /// Amazon SQS (or a compatible endpoint)
    #[default]
    Sqs,
    /// Process-local queue, for development and tests
    Memory,
}

impl std::str::FromStr for QueueProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqs" => Ok(QueueProvider::Sqs),
            "memory" | "in-memory" => Ok(QueueProvider::Memory),
            _ => Err(format!("Invalid queue provider: {}", s)),
        }
    }
}

/// Job queue configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueueConfig {
    pub provider: QueueProvider,

    /// Queue name, resolved to a URL on first use
    pub name: String,

    /// Long-poll wait time for receive calls, in seconds
    pub wait_time_seconds: i32,

    /// Endpoint override, e.g. a local SQS emulator
    #[serde(default)]
    pub endpoint_url: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub access_key_id: Option<String>,

    #[serde(default, skip_serializing)]
    pub secret_access_key: Option<String>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            provider: QueueProvider::default(),
            name: String::from("jobs"),
            wait_time_seconds: 20,
            endpoint_url: None,
            region: None,
            access_key_id: None,
            secret_access_key: None,
        }
    }
}

impl QueueConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_opt("QUEUE_PROVIDER")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.provider),
            name: env_opt("QUEUE_NAME").unwrap_or(defaults.name),
            wait_time_seconds: env_or("QUEUE_WAIT_TIME", defaults.wait_time_seconds),
            endpoint_url: env_opt("SQS_ENDPOINT_URL"),
            region: env_opt("AWS_REGION"),
            access_key_id: env_opt("AWS_ACCESS_KEY_ID"),
            secret_access_key: env_opt("AWS_SECRET_ACCESS_KEY"),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "QUEUE_NAME".to_string(),
            });
        }

        // SQS caps long polling at 20 seconds
        if !(0..=20).contains(&self.wait_time_seconds) {
            return Err(ConfigError::Invalid {
                key: "QUEUE_WAIT_TIME".to_string(),
                message: format!("{} is outside 0..=20 seconds", self.wait_time_seconds),
            });
        }

        if self.access_key_id.is_some() != self.secret_access_key.is_some() {
            return Err(ConfigError::Invalid {
                key: "AWS_ACCESS_KEY_ID".to_string(),
                message: "access key id and secret access key must be set together".to_string(),
            });
        }

        Ok(())
    }
}
