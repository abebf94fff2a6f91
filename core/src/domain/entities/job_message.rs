//! Job messages carried through the queue.
//!
//! A message is a flat JSON object of string values. The `job` key names the
//! handler, every other key is payload:
//!
//! ```json
//! {"job": "otp_email", "email": "a@x.com", "otp": "042133", "name": "Ada"}
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::JobError;

/// Key holding the job name
pub const JOB_KEY: &str = "job";

/// Sends the registration confirmation link
pub const VERIFICATION_EMAIL_JOB: &str = "verification_email";

/// Greets a user whose registration was confirmed
pub const WELCOME_EMAIL_JOB: &str = "welcome_email";

/// Delivers a login passcode
pub const OTP_EMAIL_JOB: &str = "otp_email";

/// A named unit of deferred work
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobMessage(BTreeMap<String, String>);

impl JobMessage {
    /// Creates a message for the given job with an empty payload
    pub fn new(job: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(JOB_KEY.to_string(), job.into());
        Self(fields)
    }

    /// Adds a payload entry
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The job name, when present
    pub fn job(&self) -> Option<&str> {
        self.get(JOB_KEY)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Payload value that a handler cannot run without
    pub fn require(&self, key: &str) -> Result<&str, JobError> {
        self.get(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| JobError::MissingField {
                field: key.to_string(),
            })
    }

    /// Encodes the message as a queue body
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes a queue body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
