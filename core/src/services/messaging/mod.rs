//! Messaging boundaries: the job queue and transactional email capabilities

mod traits;
mod types;

pub use traits::{JobQueue, OtpEmailSender, VerificationEmailSender, WelcomeEmailSender};
pub use types::ReceivedJob;
