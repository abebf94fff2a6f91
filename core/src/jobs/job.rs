//! The unit of work the runner dispatches to.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::job_message::JobMessage;
use crate::errors::JobError;

/// Time a handler may run before its message is left for redelivery
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(10);

/// A handler for one named job
///
/// Returning `Err` leaves the message on the queue so it is delivered again.
#[async_trait]
pub trait Job: Send + Sync {
    /// Name matched against the message's `job` field
    fn name(&self) -> &str;

    /// Upper bound on a single run
    fn timeout(&self) -> Duration {
        DEFAULT_JOB_TIMEOUT
    }

    async fn run(&self, message: &JobMessage) -> Result<(), JobError>;
}
