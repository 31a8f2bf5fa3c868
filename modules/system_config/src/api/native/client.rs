//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{ConfigError, SaveOutcome, SiteConfig, SystemConfigApi};
use crate::domain::Service;
use crate::editor::Submission;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SystemConfigApi for NativeClient {
    async fn get_config(&self) -> Result<SiteConfig, ConfigError> {
        Ok(self.service.current()?.as_ref().clone())
    }

    async fn render_editor(&self) -> Result<String, ConfigError> {
        self.service.render_editor()
    }

    async fn save_submission(
        &self,
        pairs: Vec<(String, String)>,
    ) -> Result<SaveOutcome, ConfigError> {
        self.service
            .save_submission(Submission::from_pairs(pairs))
            .await
    }

    async fn origin_allowed(&self, origin: &str) -> Result<bool, ConfigError> {
        self.service.origin_allowed(origin)
    }
}
