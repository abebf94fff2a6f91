//! Test doubles for the job runner

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::job_message::JobMessage;
use crate::errors::JobError;
use crate::jobs::Job;
use crate::services::messaging::{
    JobQueue, OtpEmailSender, ReceivedJob, VerificationEmailSender, WelcomeEmailSender,
};

/// Queue that hands out a fixed script of receive results, then idles
pub struct ScriptedJobQueue {
    script: Mutex<VecDeque<Result<Option<ReceivedJob>, String>>>,
    deleted: Mutex<Vec<String>>,
    failing_deletes: HashSet<String>,
    idle_wait: Duration,
}

impl ScriptedJobQueue {
    pub fn new(script: Vec<Result<Option<ReceivedJob>, String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            deleted: Mutex::new(Vec::new()),
            failing_deletes: HashSet::new(),
            idle_wait: Duration::from_millis(5),
        }
    }

    /// Answer empty receives immediately, like a queue polled with no wait time
    pub fn without_idle_wait(mut self) -> Self {
        self.idle_wait = Duration::ZERO;
        self
    }

    pub fn with_failing_delete(mut self, receipt: &str) -> Self {
        self.failing_deletes.insert(receipt.to_string());
        self
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

/// A received message for `job` with the given receipt
pub fn delivery(job: &str, receipt: &str) -> Result<Option<ReceivedJob>, String> {
    Ok(Some(ReceivedJob::new(
        JobMessage::new(job).with("email", "ada@example.com"),
        receipt,
    )))
}

#[async_trait]
impl JobQueue for ScriptedJobQueue {
    async fn send(&self, _message: &JobMessage) -> Result<(), String> {
        Ok(())
    }

    async fn receive(&self) -> Result<Option<ReceivedJob>, String> {
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(result) => result,
            None => {
                if !self.idle_wait.is_zero() {
                    tokio::time::sleep(self.idle_wait).await;
                }
                Ok(None)
            }
        }
    }

    async fn delete(&self, receipt: &str) -> Result<(), String> {
        if self.failing_deletes.contains(receipt) {
            return Err("receipt handle is invalid".to_string());
        }
        self.deleted.lock().unwrap().push(receipt.to_string());
        Ok(())
    }
}

/// Behaviour of a [`TestJob`] run
#[derive(Clone, Copy)]
pub enum Behaviour {
    Succeed,
    Fail,
    Panic,
    Sleep(Duration),
}

pub struct TestJob {
    pub name: &'static str,
    pub behaviour: Behaviour,
    pub timeout: Duration,
    pub started: AtomicBool,
    pub finished: AtomicBool,
    pub runs: AtomicUsize,
}

impl TestJob {
    pub fn new(name: &'static str, behaviour: Behaviour) -> Arc<Self> {
        Self::with_timeout(name, behaviour, Duration::from_secs(2))
    }

    pub fn with_timeout(name: &'static str, behaviour: Behaviour, timeout: Duration) -> Arc<Self> {
        Arc::new(Self {
            name,
            behaviour,
            timeout,
            started: AtomicBool::new(false),
            finished: AtomicBool::new(false),
            runs: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl Job for TestJob {
    fn name(&self) -> &str {
        self.name
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn run(&self, _message: &JobMessage) -> Result<(), JobError> {
        self.started.store(true, Ordering::SeqCst);
        self.runs.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Succeed => {}
            Behaviour::Fail => {
                return Err(JobError::Failed {
                    message: "boom".to_string(),
                })
            }
            Behaviour::Panic => panic!("job exploded"),
            Behaviour::Sleep(duration) => tokio::time::sleep(duration).await,
        }
        self.finished.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Email capability double recording every call as `kind:email:detail`
#[derive(Default)]
pub struct RecordingSender {
    pub calls: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<String, String> {
        if self.fail {
            return Err("provider rejected the message".to_string());
        }
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        Ok(format!("message-{}", calls.len()))
    }
}

#[async_trait]
impl VerificationEmailSender for RecordingSender {
    async fn send_verification_email(&self, email: &str, token: &str) -> Result<String, String> {
        self.record(format!("verification:{email}:{token}"))
    }
}

#[async_trait]
impl WelcomeEmailSender for RecordingSender {
    async fn send_welcome_email(&self, email: &str, name: &str) -> Result<String, String> {
        self.record(format!("welcome:{email}:{name}"))
    }
}

#[async_trait]
impl OtpEmailSender for RecordingSender {
    async fn send_otp_email(&self, email: &str, otp: &str, name: &str) -> Result<String, String> {
        self.record(format!("otp:{email}:{otp}:{name}"))
    }
}
