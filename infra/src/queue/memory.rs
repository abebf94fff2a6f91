//! Process-local job queue
//!
//! Mirrors the visibility model of SQS: a received message moves in flight
//! and is handed out again once its visibility timeout elapses, unless it was
//! deleted first. Intended for local development and tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use tokio::time::{timeout, Instant};

use frcc_core::domain::entities::job_message::JobMessage;
use frcc_core::services::messaging::{JobQueue, ReceivedJob};

/// Default visibility timeout of a received message, as on SQS
pub const DEFAULT_VISIBILITY_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
struct QueueState {
    pending: VecDeque<JobMessage>,
    in_flight: HashMap<String, InFlight>,
    next_receipt: u64,
}

struct InFlight {
    message: JobMessage,
    visible_at: Instant,
}

/// In-memory job queue
pub struct InMemoryJobQueue {
    state: Mutex<QueueState>,
    notify: Notify,
    wait_time: Duration,
    visibility_timeout: Duration,
}

impl InMemoryJobQueue {
    /// Create a queue whose receive waits up to `wait_time` for a message
    pub fn new(wait_time: Duration) -> Self {
        Self {
            state: Mutex::new(QueueState::default()),
            notify: Notify::new(),
            wait_time,
            visibility_timeout: DEFAULT_VISIBILITY_TIMEOUT,
        }
    }

    pub fn with_visibility_timeout(mut self, visibility_timeout: Duration) -> Self {
        self.visibility_timeout = visibility_timeout;
        self
    }

    /// Messages waiting to be received
    pub fn pending_len(&self) -> usize {
        self.lock().pending.len()
    }

    /// Messages received but not yet deleted
    pub fn in_flight_len(&self) -> usize {
        self.lock().in_flight.len()
    }

    /// Snapshot of the messages waiting to be received, oldest first
    pub fn pending(&self) -> Vec<JobMessage> {
        self.lock().pending.iter().cloned().collect()
    }

    /// Make an in-flight message visible again immediately
    pub fn requeue(&self, receipt: &str) -> bool {
        let requeued = {
            let mut state = self.lock();
            match state.in_flight.remove(receipt) {
                Some(entry) => {
                    state.pending.push_back(entry.message);
                    true
                }
                None => false,
            }
        };
        if requeued {
            self.notify.notify_one();
        }
        requeued
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn take_next(&self) -> Option<ReceivedJob> {
        let now = Instant::now();
        let mut state = self.lock();

        let expired: Vec<String> = state
            .in_flight
            .iter()
            .filter(|(_, entry)| entry.visible_at <= now)
            .map(|(receipt, _)| receipt.clone())
            .collect();
        for receipt in expired {
            if let Some(entry) = state.in_flight.remove(&receipt) {
                state.pending.push_back(entry.message);
            }
        }

        let message = state.pending.pop_front()?;
        state.next_receipt += 1;
        let receipt = format!("mem-{}", state.next_receipt);
        state.in_flight.insert(
            receipt.clone(),
            InFlight {
                message: message.clone(),
                visible_at: now + self.visibility_timeout,
            },
        );

        Some(ReceivedJob::new(message, receipt))
    }
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn send(&self, message: &JobMessage) -> Result<(), String> {
        self.lock().pending.push_back(message.clone());
        self.notify.notify_one();
        Ok(())
    }

    async fn receive(&self) -> Result<Option<ReceivedJob>, String> {
        let deadline = Instant::now() + self.wait_time;

        loop {
            if let Some(received) = self.take_next() {
                return Ok(Some(received));
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(None);
            }

            // Wake early for in-flight messages becoming visible again
            let next_visible = {
                let state = self.lock();
                state
                    .in_flight
                    .values()
                    .map(|entry| entry.visible_at.saturating_duration_since(Instant::now()))
                    .min()
            };
            let wait = next_visible.map_or(remaining, |d| d.min(remaining));

            let _ = timeout(wait, self.notify.notified()).await;
        }
    }

    async fn delete(&self, receipt: &str) -> Result<(), String> {
        match self.lock().in_flight.remove(receipt) {
            Some(_) => Ok(()),
            None => Err(format!("Unknown receipt handle: {}", receipt)),
        }
    }
}
