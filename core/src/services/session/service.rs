//! Session token service implementation

use chrono::{TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::session::{Claims, SessionToken};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::SessionTokenConfig;

/// Issues and verifies signed session tokens
pub struct SessionTokenService {
    config: SessionTokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionTokenService {
    /// Creates a new session token service using a symmetric secret
    pub fn new(config: SessionTokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a session token for an authenticated user
    ///
    /// # Returns
    ///
    /// * `Ok(SessionToken)` - The signed token and the instant it expires
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<SessionToken, DomainError> {
        let claims = Claims::for_user(
            user,
            &self.config.issuer,
            &self.config.audience,
            self.config.expiry_hours,
        );

        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or(DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(SessionToken {
            token: self.encode_jwt(&claims)?,
            expires_at,
        })
    }

    /// Verifies a session token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is invalid, expired, or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    DomainError::Token(TokenError::InvalidClaims)
                }
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        Ok(token_data.claims)
    }

    /// Session lifetime in seconds, used for the cookie max-age
    pub fn session_lifetime_seconds(&self) -> i64 {
        self.config.expiry_hours * 3600
    }

    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
