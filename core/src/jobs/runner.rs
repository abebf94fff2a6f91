//! Queue consumer that dispatches each message to its registered job.
//!
//! The runner long-polls the queue, spawns one task per message and deletes
//! the message only after its job succeeded. Anything else (failure, timeout,
//! panic, unknown job name) leaves the message on the queue, where it becomes
//! visible again and is redelivered.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio::time::{sleep, timeout};
use tracing::{error, info, warn};

use super::job::Job;
use super::registry::JobRegistry;
use crate::services::messaging::{JobQueue, ReceivedJob};

/// Runner tuning
#[derive(Debug, Clone)]
pub struct JobRunnerConfig {
    /// Pause after a failed receive
    pub error_backoff: Duration,
    /// Upper bound on deleting a processed message
    pub delete_timeout: Duration,
}

impl Default for JobRunnerConfig {
    fn default() -> Self {
        Self {
            error_backoff: Duration::from_secs(1),
            delete_timeout: Duration::from_secs(1),
        }
    }
}

/// How a single dispatched message ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// The job succeeded; `deleted` is false when the acknowledgement failed
    Completed { deleted: bool },
    Failed,
    TimedOut,
    Panicked,
}

/// Counters reported when the runner stops
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerSummary {
    pub completed: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub panicked: usize,
    /// Messages without a job name or naming an unregistered job
    pub unroutable: usize,
    pub receive_errors: usize,
    /// Successful jobs whose message could not be deleted
    pub delete_failures: usize,
}

impl RunnerSummary {
    fn record(&mut self, outcome: JobOutcome) {
        match outcome {
            JobOutcome::Completed { deleted } => {
                self.completed += 1;
                if !deleted {
                    self.delete_failures += 1;
                }
            }
            JobOutcome::Failed => self.failed += 1,
            JobOutcome::TimedOut => self.timed_out += 1,
            JobOutcome::Panicked => self.panicked += 1,
        }
    }

    fn record_join(&mut self, result: Result<JobOutcome, tokio::task::JoinError>) {
        match result {
            Ok(outcome) => self.record(outcome),
            Err(err) => {
                error!(error = %err, "Job task ended abnormally");
                self.panicked += 1;
            }
        }
    }
}

/// Consumes the job queue until shutdown is signalled
pub struct JobRunner<Q: JobQueue + ?Sized + 'static> {
    queue: Arc<Q>,
    registry: Arc<JobRegistry>,
    config: JobRunnerConfig,
}

impl<Q: JobQueue + ?Sized + 'static> JobRunner<Q> {
    pub fn new(queue: Arc<Q>, registry: Arc<JobRegistry>, config: JobRunnerConfig) -> Self {
        Self {
            queue,
            registry,
            config,
        }
    }

    /// Run until `shutdown` turns true or its sender is dropped
    ///
    /// No new message is received once shutdown is observed. Jobs already in
    /// flight run to completion (bounded by their own timeout) before this
    /// returns.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> RunnerSummary {
        let mut tasks: JoinSet<JobOutcome> = JoinSet::new();
        let mut summary = RunnerSummary::default();

        info!(jobs = ?self.registry.names(), "Job runner started");

        loop {
            while let Some(result) = tasks.try_join_next() {
                summary.record_join(result);
            }

            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                received = self.queue.receive() => match received {
                    Ok(Some(received)) => self.dispatch(received, &mut tasks, &mut summary),
                    // A receive that returned without waiting must not starve other tasks
                    Ok(None) => tokio::task::yield_now().await,
                    Err(err) => {
                        error!(error = %err, "Error receiving message");
                        summary.receive_errors += 1;
                        tokio::select! {
                            _ = shutdown.changed() => {}
                            _ = sleep(self.config.error_backoff) => {}
                        }
                    }
                },
            }
        }

        info!(in_flight = tasks.len(), "Job runner stopping, waiting for running jobs");

        while let Some(result) = tasks.join_next().await {
            summary.record_join(result);
        }

        info!(?summary, "Job runner stopped");
        summary
    }

    fn dispatch(
        &self,
        received: ReceivedJob,
        tasks: &mut JoinSet<JobOutcome>,
        summary: &mut RunnerSummary,
    ) {
        let Some(name) = received.message.job() else {
            warn!("Message has no job name, leaving it on the queue");
            summary.unroutable += 1;
            return;
        };

        let Some(job) = self.registry.get(name) else {
            warn!(job = %name, "No job registered with this name, leaving message on the queue");
            summary.unroutable += 1;
            return;
        };

        tasks.spawn(execute(
            job,
            self.queue.clone(),
            received,
            self.config.delete_timeout,
        ));
    }
}

async fn execute<Q: JobQueue + ?Sized>(
    job: Arc<dyn Job>,
    queue: Arc<Q>,
    received: ReceivedJob,
    delete_timeout: Duration,
) -> JobOutcome {
    let name = job.name().to_string();
    let limit = job.timeout();
    let started = Instant::now();

    let ReceivedJob { message, receipt } = received;
    let mut handle = tokio::spawn({
        let job = job.clone();
        async move { job.run(&message).await }
    });

    match timeout(limit, &mut handle).await {
        Ok(Ok(Ok(()))) => {
            info!(job = %name, duration_ms = started.elapsed().as_millis() as u64, "Successfully ran job");
        }
        Ok(Ok(Err(err))) => {
            warn!(job = %name, error = %err, "Error running job");
            return JobOutcome::Failed;
        }
        Ok(Err(err)) if err.is_panic() => {
            error!(job = %name, "Job panicked");
            return JobOutcome::Panicked;
        }
        Ok(Err(err)) => {
            error!(job = %name, error = %err, "Job task was cancelled");
            return JobOutcome::Failed;
        }
        Err(_) => {
            handle.abort();
            error!(job = %name, timeout_ms = limit.as_millis() as u64, "Job timed out");
            return JobOutcome::TimedOut;
        }
    }

    let deleted = match timeout(delete_timeout, queue.delete(&receipt)).await {
        Ok(Ok(())) => true,
        Ok(Err(err)) => {
            warn!(job = %name, error = %err, "Error deleting message, job will be repeated");
            false
        }
        Err(_) => {
            warn!(job = %name, "Timed out deleting message, job will be repeated");
            false
        }
    };

    JobOutcome::Completed { deleted }
}
