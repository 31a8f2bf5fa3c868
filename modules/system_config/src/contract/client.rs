//! Native client trait for inter-module communication
//!
//! Other modules read the configuration and drive the admin editor through
//! this trait. NO HTTP - direct function calls.

use super::{
    error::ConfigError,
    model::{SaveOutcome, SiteConfig},
};
use async_trait::async_trait;

/// System config API for inter-module communication
#[async_trait]
pub trait SystemConfigApi: Send + Sync {
    /// Current snapshot of the record
    async fn get_config(&self) -> Result<SiteConfig, ConfigError>;

    /// Render the admin editor document for the current record
    async fn render_editor(&self) -> Result<String, ConfigError>;

    /// Decode and persist a submitted editor form
    async fn save_submission(
        &self,
        pairs: Vec<(String, String)>,
    ) -> Result<SaveOutcome, ConfigError>;

    /// Whether a cross-origin request from `origin` is allowed
    async fn origin_allowed(&self, origin: &str) -> Result<bool, ConfigError>;
}
