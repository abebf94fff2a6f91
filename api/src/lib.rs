//! # FRCC API
//!
//! HTTP surface of the registration backend: request DTOs, route handlers,
//! error mapping and the application factory shared by the binary and the
//! integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod telemetry;

pub use app::create_app;
pub use routes::auth::AppState;
