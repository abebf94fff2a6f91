//! Session token and cookie configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Session token lifetime in hours
    pub expiry_hours: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            expiry_hours: 24,
            issuer: String::from("frcc"),
            audience: String::from("frcc-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session cookie name
    pub cookie_name: String,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Session cookie SameSite attribute
    pub same_site: String,

    /// Session cookie HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("jwt"),
            secure: true,
            same_site: String::from("Lax"),
            http_only: default_http_only(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            jwt: JwtConfig {
                secret: env_opt("JWT_SECRET").unwrap_or(defaults.jwt.secret),
                expiry_hours: env_or("JWT_EXPIRY_HOURS", defaults.jwt.expiry_hours),
                ..defaults.jwt
            },
            session: SessionConfig {
                cookie_name: env_opt("SESSION_COOKIE_NAME").unwrap_or(defaults.session.cookie_name),
                secure: env_or("SESSION_COOKIE_SECURE", defaults.session.secure),
                ..defaults.session
            },
        }
    }
}

fn default_http_only() -> bool {
    true
}
