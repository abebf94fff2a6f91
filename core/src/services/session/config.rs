//! Configuration for the session token service

use jsonwebtoken::Algorithm;

use frcc_shared::config::JwtConfig;

use crate::domain::entities::session::{JWT_AUDIENCE, JWT_ISSUER, SESSION_EXPIRY_HOURS};

/// Configuration for the session token service
#[derive(Debug, Clone)]
pub struct SessionTokenConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Session lifetime in hours
    pub expiry_hours: i64,
    pub issuer: String,
    pub audience: String,
}

impl Default for SessionTokenConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            expiry_hours: SESSION_EXPIRY_HOURS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<&JwtConfig> for SessionTokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            expiry_hours: config.expiry_hours,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}
