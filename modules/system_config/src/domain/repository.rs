//! Repository trait for the configuration record
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::SiteConfig;
use anyhow::Result;
use async_trait::async_trait;

/// Storage of the singleton record
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Load the record, `None` before the first save
    async fn load(&self) -> Result<Option<SiteConfig>>;

    /// Insert or overwrite the record
    async fn save(&self, config: &SiteConfig) -> Result<SiteConfig>;
}
