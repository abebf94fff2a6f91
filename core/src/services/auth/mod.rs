//! Authentication service module
//!
//! This module drives the registration and login state machine:
//! - Registration with an emailed confirmation link
//! - Confirmation of a pending registration
//! - Login through a one-time passcode sent by email
//! - Session token issuance once the passcode checks out

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
