//! Domain service - owns the singleton record
//!
//! Reads are served from an in-memory snapshot. Saves are serialized by a
//! single async lock and swap the snapshot only after the repository commit;
//! concurrent saves resolve last-write-wins.

use super::bootstrap::{bootstrap, new_etag};
use super::cache::CachePurger;
use super::cors;
use super::editor::{self, changed_fields, CACHE_INVALIDATE_FIELD, INVALIDATE_FLAG};
use super::events::{ConfigEvent, EventPublisher};
use super::repository::ConfigRepository;
use super::validation::{normalize_domain, validate_admin_email, validate_port};
use crate::config::Config;
use crate::contract::{ConfigError, SaveOutcome, SiteConfig};
use crate::editor::{decode, Decoded, EditorChrome, Submission};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Domain service for the system configuration record
pub struct Service {
    repo: Arc<dyn ConfigRepository>,
    cache_purger: Arc<dyn CachePurger>,
    event_publisher: Arc<dyn EventPublisher>,
    config: Config,
    current: RwLock<Option<Arc<SiteConfig>>>,
    save_lock: Mutex<()>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        repo: Arc<dyn ConfigRepository>,
        cache_purger: Arc<dyn CachePurger>,
        event_publisher: Arc<dyn EventPublisher>,
        config: Config,
    ) -> Self {
        Self {
            repo,
            cache_purger,
            event_publisher,
            config,
            current: RwLock::new(None),
            save_lock: Mutex::new(()),
        }
    }

    /// Load the record, creating it with defaults on first run
    pub async fn init(&self) -> Result<Arc<SiteConfig>, ConfigError> {
        let _guard = self.save_lock.lock().await;

        let cached = self.current.read().clone();
        if let Some(current) = cached {
            return Ok(current);
        }

        let record = match self
            .repo
            .load()
            .await
            .map_err(internal("Failed to load system config"))?
        {
            Some(record) => {
                tracing::debug!("Loaded existing system config");
                record
            }
            None => {
                let record = self
                    .repo
                    .save(&bootstrap(&self.config))
                    .await
                    .map_err(internal("Failed to create system config"))?;
                tracing::info!("Created system config with defaults");
                record
            }
        };

        let record = Arc::new(record);
        *self.current.write() = Some(record.clone());
        Ok(record)
    }

    /// Current snapshot of the record
    pub fn current(&self) -> Result<Arc<SiteConfig>, ConfigError> {
        self.current.read().clone().ok_or(ConfigError::NotInitialized)
    }

    /// Render the editor document for the current snapshot
    pub fn render_editor(&self) -> Result<String, ConfigError> {
        let config = self.current()?;
        editor::render_editor(&config, &self.chrome()).map_err(|e| {
            tracing::error!(error = %e, "System config editor render failed");
            ConfigError::Render {
                message: e.to_string(),
            }
        })
    }

    /// Decode a submitted editor form and persist the result
    ///
    /// `client_secret` and `etag` always keep their prior values, whatever
    /// the submission carried. When the `invalidate` command is present the
    /// cache purger runs exactly once, after the record is committed.
    pub async fn save_submission(&self, submission: Submission) -> Result<SaveOutcome, ConfigError> {
        let _guard = self.save_lock.lock().await;
        let prior = self.current()?;

        let Decoded {
            entity: mut next,
            commands,
        } = decode(prior.as_ref(), &submission).map_err(|e| ConfigError::Submission {
            message: e.to_string(),
        })?;

        next.retain_server_owned(&prior);
        next.domain = normalize_domain(&next.domain)?;
        validate_port(&next.http_port)?;
        validate_port(&next.https_port)?;
        validate_admin_email(&next.admin_email)?;

        let invalidate = commands.contains(CACHE_INVALIDATE_FIELD, INVALIDATE_FLAG);
        if invalidate && self.config.rotate_etag_on_invalidate {
            next.etag = new_etag();
        }

        let changed = changed_fields(&prior, &next);
        let saved = Arc::new(
            self.repo
                .save(&next)
                .await
                .map_err(internal("Failed to persist system config"))?,
        );
        *self.current.write() = Some(saved.clone());
        tracing::info!(changed = ?changed, invalidate, "System config saved");

        let mut cache_invalidated = false;
        if invalidate {
            match self.cache_purger.purge().await {
                Ok(()) => cache_invalidated = true,
                Err(e) => tracing::error!(error = ?e, "Cache purge failed"),
            }
        }

        if let Err(e) = self.event_publisher.publish(ConfigEvent::saved(&changed)).await {
            // Log error but don't fail the operation
            tracing::warn!(error = ?e, "Failed to publish config saved event");
        }
        if cache_invalidated {
            if let Err(e) = self
                .event_publisher
                .publish(ConfigEvent::cache_invalidated(saved.etag.clone()))
                .await
            {
                tracing::warn!(error = ?e, "Failed to publish cache invalidated event");
            }
        }

        Ok(SaveOutcome {
            config: saved.as_ref().clone(),
            cache_invalidated,
            changed_fields: changed,
        })
    }

    /// Whether a cross-origin request from `origin` is allowed
    pub fn origin_allowed(&self, origin: &str) -> Result<bool, ConfigError> {
        let config = self.current()?;
        Ok(cors::origin_allowed(&config, origin))
    }

    /// Path the editor form submits to
    pub fn editor_action(&self) -> &str {
        &self.config.editor_action
    }

    fn chrome(&self) -> EditorChrome {
        EditorChrome {
            title: self.config.editor_title.clone(),
            action: self.config.editor_action.clone(),
        }
    }
}

fn internal(context: &'static str) -> impl FnOnce(anyhow::Error) -> ConfigError {
    move |e| {
        tracing::error!(error = ?e, "{}", context);
        ConfigError::Internal
    }
}
