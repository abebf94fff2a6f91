//! Background jobs: the registry of named handlers and the queue runner.

pub mod email;
pub mod job;
pub mod registry;
pub mod runner;

pub use email::{register_email_jobs, OtpEmailJob, VerificationEmailJob, WelcomeEmailJob};
pub use job::{Job, DEFAULT_JOB_TIMEOUT};
pub use registry::JobRegistry;
pub use runner::{JobOutcome, JobRunner, JobRunnerConfig, RunnerSummary};

#[cfg(test)]
mod tests;
