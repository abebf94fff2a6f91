//! Session token service module
//!
//! Issues the signed JWT handed to a user after a successful passcode check
//! and verifies it on later requests.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::SessionTokenConfig;
pub use service::SessionTokenService;
