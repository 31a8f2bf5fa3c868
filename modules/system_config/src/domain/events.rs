//! Domain events for system config
//!
//! Events are published after a save has been committed:
//! - `config_saved`: the record changed (or was resubmitted unchanged)
//! - `cache_invalidated`: the save carried the invalidate command and the purge ran

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types for system config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ConfigEvent {
    /// The record was saved
    ConfigSaved(ConfigSavedEvent),
    /// The response cache was purged
    CacheInvalidated(CacheInvalidatedEvent),
}

/// Event data for a save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSavedEvent {
    /// Submit names of the fields that changed
    pub changed_fields: Vec<String>,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for a cache purge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInvalidatedEvent {
    /// Etag in effect after the purge
    pub etag: String,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: ConfigEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: ConfigEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

impl ConfigEvent {
    pub fn saved(changed_fields: &[&str]) -> Self {
        ConfigEvent::ConfigSaved(ConfigSavedEvent {
            changed_fields: changed_fields.iter().map(|f| f.to_string()).collect(),
            timestamp: Utc::now(),
        })
    }

    pub fn cache_invalidated(etag: impl Into<String>) -> Self {
        ConfigEvent::CacheInvalidated(CacheInvalidatedEvent {
            etag: etag.into(),
            timestamp: Utc::now(),
        })
    }
}
