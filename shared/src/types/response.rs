//! API response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `pass` while the process is serving requests
    pub status: String,

    /// Service version
    pub version: String,

    /// Human readable service description
    pub description: String,

    /// Time at which the check was answered
    pub time: DateTime<Utc>,
}

impl HealthResponse {
    /// Create a passing health response stamped with the current time
    pub fn pass(version: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: String::from("pass"),
            version: version.into(),
            description: description.into(),
            time: Utc::now(),
        }
    }
}
