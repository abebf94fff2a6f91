//! Transactional email configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, ConfigError};

/// Transport used to deliver transactional emails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Postmark,
    /// Logs instead of sending
    Mock,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postmark" => Ok(EmailProvider::Postmark),
            "mock" => Ok(EmailProvider::Mock),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

/// Local front end address used when `BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Transactional email configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,

    /// Postmark server token
    #[serde(default, skip_serializing)]
    pub postmark_token: Option<String>,

    /// Postmark API base URL
    pub postmark_api_url: String,

    /// Display name of the transactional sender
    pub sender_name: String,

    /// Address of the transactional sender
    pub sender_address: String,

    /// Public URL of the registration front end, not of this API
    ///
    /// Confirmation links are `{base_url}/register/confirm/{token}`. The
    /// front end serves that page and posts the token as a form to the API's
    /// `POST /register/confirm`.
    pub base_url: String,

    /// Public website mentioned in email bodies
    pub website: String,

    /// Request timeout for the provider API, in seconds
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            postmark_token: None,
            postmark_api_url: String::from("https://api.postmarkapp.com"),
            sender_name: String::from("FRCC"),
            sender_address: String::from("no-reply@localhost"),
            base_url: String::from(DEFAULT_BASE_URL),
            website: String::from(DEFAULT_BASE_URL),
            timeout_seconds: 3,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_opt("EMAIL_PROVIDER")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.provider),
            postmark_token: env_opt("POSTMARK_TOKEN"),
            postmark_api_url: env_opt("POSTMARK_API_URL").unwrap_or(defaults.postmark_api_url),
            sender_name: env_opt("TRANSACTIONAL_EMAIL_NAME").unwrap_or(defaults.sender_name),
            sender_address: env_opt("TRANSACTIONAL_EMAIL_ADDRESS")
                .unwrap_or(defaults.sender_address),
            base_url: env_opt("BASE_URL").unwrap_or(defaults.base_url),
            website: env_opt("WEBSITE").unwrap_or(defaults.website),
            ..defaults
        }
    }

    /// Formatted `From` header value, e.g. `FRCC <no-reply@frcc.org>`
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.sender_name, self.sender_address)
    }

    /// Whether confirmation links still point at the local default
    pub fn is_using_default_base_url(&self) -> bool {
        self.base_url.trim_end_matches('/') == DEFAULT_BASE_URL
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.provider == EmailProvider::Postmark && self.postmark_token.is_none() {
            return Err(ConfigError::Missing {
                key: "POSTMARK_TOKEN".to_string(),
            });
        }

        if self.sender_address.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "TRANSACTIONAL_EMAIL_ADDRESS".to_string(),
            });
        }

        Ok(())
    }
}
