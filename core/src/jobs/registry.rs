//! Job registry mapping job names to handlers.

use std::collections::HashMap;
use std::sync::Arc;

use super::job::Job;

/// Registry of available jobs, built once at startup and read-only afterwards
pub struct JobRegistry {
    jobs: HashMap<String, Arc<dyn Job>>,
}

impl JobRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            jobs: HashMap::new(),
        }
    }

    /// Register a job under its own name, replacing any previous handler.
    pub fn register(&mut self, job: Arc<dyn Job>) -> &mut Self {
        let name = job.name().to_string();
        if self.jobs.insert(name.clone(), job).is_some() {
            tracing::warn!(job = %name, "Replacing previously registered job");
        }
        self
    }

    /// Get a job by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Job>> {
        self.jobs.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.jobs.contains_key(name)
    }

    /// List all registered job names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.jobs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::job_message::JobMessage;
    use crate::errors::JobError;
    use async_trait::async_trait;

    struct NamedJob(&'static str);

    #[async_trait]
    impl Job for NamedJob {
        fn name(&self) -> &str {
            self.0
        }

        async fn run(&self, _message: &JobMessage) -> Result<(), JobError> {
            Ok(())
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = JobRegistry::new();
        registry
            .register(Arc::new(NamedJob("welcome_email")))
            .register(Arc::new(NamedJob("otp_email")));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("otp_email"));
        assert_eq!(registry.get("welcome_email").unwrap().name(), "welcome_email");
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.names(), vec!["otp_email", "welcome_email"]);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = JobRegistry::default();
        registry.register(Arc::new(NamedJob("otp_email")));
        registry.register(Arc::new(NamedJob("otp_email")));

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        let registry = JobRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }
}
