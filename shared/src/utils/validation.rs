//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Valid email addresses as defined by the WHATWG HTML living standard
/// (<https://html.spec.whatwg.org/#valid-e-mail-address>).
static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<local>[a-zA-Z0-9.!#$%&'*+/=?^_\x60{|}~-]+)",
        "@",
        r"(?P<domain>[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*)$",
    ))
    .expect("email regex is valid")
});

/// Check if an email address is valid
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_ADDRESS.is_match(email)
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }
}
