//! Types exchanged with the job queue

use crate::domain::entities::job_message::JobMessage;

/// A message handed out by the queue, with the receipt needed to delete it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedJob {
    pub message: JobMessage,
    pub receipt: String,
}

impl ReceivedJob {
    pub fn new(message: JobMessage, receipt: impl Into<String>) -> Self {
        Self {
            message,
            receipt: receipt.into(),
        }
    }
}
