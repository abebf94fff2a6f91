//! Request bodies accepted by the HTTP API

pub mod auth;

pub use auth::{ConfirmForm, LoginRequest, OtpRequest, RegisterRequest};
