//! Registration confirmation token.
//!
//! The plain token is only ever placed in the verification email. The store
//! keeps its SHA-256 digest, so a leaked table cannot be used to confirm
//! accounts.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes in a token (rendered as twice as many hex characters)
pub const CONFIRMATION_TOKEN_BYTES: usize = 32;

/// A freshly generated confirmation secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationToken(String);

impl ConfirmationToken {
    /// Generates a new random token
    pub fn generate() -> Self {
        let mut bytes = [0u8; CONFIRMATION_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// The plain token, as sent to the user
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digest stored alongside the user
    pub fn hash(&self) -> String {
        hash_confirmation_token(&self.0)
    }
}

/// Hex-encoded SHA-256 digest of a plain token
pub fn hash_confirmation_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
