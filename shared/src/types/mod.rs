//! Type definitions shared by the HTTP layer
//!
//! - `response` - health check payload

pub mod response;

pub use response::HealthResponse;
