//! Amazon SQS job queue
//!
//! The queue URL is looked up from the queue name on first use and memoized.
//! Concurrent first callers share a single lookup; a failed lookup leaves the
//! cell empty so the next call retries it.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::{config::Region, error::DisplayErrorContext, Client as SqsClient};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use frcc_core::domain::entities::job_message::JobMessage;
use frcc_core::services::messaging::{JobQueue, ReceivedJob};
use frcc_shared::QueueConfig;

use crate::InfrastructureError;

/// SQS-backed job queue
pub struct SqsJobQueue {
    client: SqsClient,
    name: String,
    wait_time_seconds: i32,
    url: OnceCell<String>,
}

impl SqsJobQueue {
    /// Build a client from the queue configuration
    ///
    /// Region and credentials fall back to the default AWS provider chain
    /// when they are not configured explicitly.
    pub async fn new(config: &QueueConfig) -> Result<Self, InfrastructureError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            info!(endpoint_url = %endpoint_url, "Using SQS endpoint override");
            loader = loader.endpoint_url(endpoint_url);
        }

        match (&config.access_key_id, &config.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => {
                let credentials = aws_credential_types::Credentials::new(
                    access_key_id,
                    secret_access_key,
                    None,
                    None,
                    "frcc_job_queue",
                );
                loader = loader.credentials_provider(credentials);
            }
            (None, None) => {}
            _ => {
                return Err(InfrastructureError::Config(
                    "AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY must be set together".to_string(),
                ))
            }
        }

        let sdk_config = loader.load().await;

        info!(queue = %config.name, wait_time_seconds = config.wait_time_seconds, "SQS job queue initialized");

        Ok(Self::from_client(
            SqsClient::new(&sdk_config),
            config.name.clone(),
            config.wait_time_seconds,
        ))
    }

    pub fn from_client(client: SqsClient, name: String, wait_time_seconds: i32) -> Self {
        Self {
            client,
            name,
            wait_time_seconds,
            url: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    async fn queue_url(&self) -> Result<&str, String> {
        self.url
            .get_or_try_init(|| async {
                let output = self
                    .client
                    .get_queue_url()
                    .queue_name(&self.name)
                    .send()
                    .await
                    .map_err(|e| format!("Failed to resolve queue URL: {}", DisplayErrorContext(&e)))?;

                let url = output
                    .queue_url()
                    .ok_or_else(|| format!("No URL returned for queue {}", self.name))?
                    .to_string();

                debug!(queue = %self.name, url = %url, "Resolved queue URL");
                Ok::<_, String>(url)
            })
            .await
            .map(String::as_str)
    }
}

#[async_trait]
impl JobQueue for SqsJobQueue {
    async fn send(&self, message: &JobMessage) -> Result<(), String> {
        let url = self.queue_url().await?;
        let body = message
            .to_json()
            .map_err(|e| format!("Failed to encode job message: {}", e))?;

        self.client
            .send_message()
            .queue_url(url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| format!("Failed to send message: {}", DisplayErrorContext(&e)))?;

        Ok(())
    }

    async fn receive(&self) -> Result<Option<ReceivedJob>, String> {
        let url = self.queue_url().await?;

        let output = self
            .client
            .receive_message()
            .queue_url(url)
            .max_number_of_messages(1)
            .wait_time_seconds(self.wait_time_seconds)
            .send()
            .await
            .map_err(|e| format!("Failed to receive message: {}", DisplayErrorContext(&e)))?;

        let Some(message) = output.messages().first() else {
            return Ok(None);
        };

        let receipt = message
            .receipt_handle()
            .ok_or_else(|| "Received message without receipt handle".to_string())?;
        let body = message.body().unwrap_or_default();
        let job = JobMessage::from_json(body)
            .map_err(|e| format!("Failed to decode job message: {}", e))?;

        Ok(Some(ReceivedJob::new(job, receipt)))
    }

    async fn delete(&self, receipt: &str) -> Result<(), String> {
        let url = self.queue_url().await?;

        self.client
            .delete_message()
            .queue_url(url)
            .receipt_handle(receipt)
            .send()
            .await
            .map_err(|e| format!("Failed to delete message: {}", DisplayErrorContext(&e)))?;

        Ok(())
    }
}
