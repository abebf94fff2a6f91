//! # FRCC Core
//!
//! Domain layer of the FRCC registration backend: the user and passcode
//! entities, the registration and login state machine, the repository and
//! messaging capability traits, and the background job registry and runner.
//! Infrastructure adapters live in `frcc_infra`.

pub mod domain;
pub mod errors;
pub mod jobs;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
