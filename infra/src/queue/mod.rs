//! Job queue backends
//!
//! - [`SqsJobQueue`]: Amazon SQS, or any SQS-compatible endpoint
//! - [`InMemoryJobQueue`]: process-local queue for development and tests

use std::sync::Arc;
use std::time::Duration;

use frcc_core::services::messaging::JobQueue;
use frcc_shared::{QueueConfig, QueueProvider};

use crate::InfrastructureError;

pub mod memory;
#[cfg(feature = "sqs")]
pub mod sqs;

pub use memory::InMemoryJobQueue;
#[cfg(feature = "sqs")]
pub use sqs::SqsJobQueue;

/// Create the job queue selected by the configuration
pub async fn create_job_queue(
    config: &QueueConfig,
) -> Result<Arc<dyn JobQueue>, InfrastructureError> {
    match config.provider {
        QueueProvider::Memory => {
            tracing::warn!("Using in-memory job queue, jobs are lost on restart");
            let wait_time = Duration::from_secs(config.wait_time_seconds.max(0) as u64);
            Ok(Arc::new(InMemoryJobQueue::new(wait_time)))
        }
        #[cfg(feature = "sqs")]
        QueueProvider::Sqs => Ok(Arc::new(SqsJobQueue::new(config).await?)),
        #[cfg(not(feature = "sqs"))]
        QueueProvider::Sqs => Err(InfrastructureError::Config(
            "SQS support is not compiled in (enable the `sqs` feature)".to_string(),
        )),
    }
}
