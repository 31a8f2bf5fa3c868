//! Response cache purge collaborator

/// Purges whatever HTTP response cache sits in front of the site
#[async_trait::async_trait]
pub trait CachePurger: Send + Sync {
    async fn purge(&self) -> anyhow::Result<()>;
}

/// Purger for deployments without a response cache
pub struct NoOpCachePurger;

#[async_trait::async_trait]
impl CachePurger for NoOpCachePurger {
    async fn purge(&self) -> anyhow::Result<()> {
        tracing::debug!("No response cache configured, nothing to purge");
        Ok(())
    }
}
