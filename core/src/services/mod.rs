//! Business services containing domain logic and use cases.

pub mod auth;
pub mod messaging;
pub mod session;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use messaging::{
    JobQueue, OtpEmailSender, ReceivedJob, VerificationEmailSender, WelcomeEmailSender,
};
pub use session::{SessionTokenConfig, SessionTokenService};
