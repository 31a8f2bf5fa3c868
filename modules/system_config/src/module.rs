//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::contract::SystemConfigApi;
use crate::domain::{CachePurger, NoOpEventPublisher, Service};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// System config module
pub struct SystemConfigModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for SystemConfigModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl SystemConfigModule {
    /// Build the service and load (or create) the record
    pub async fn init(
        &self,
        cfg: Config,
        db: DatabaseConnection,
        cache_purger: Arc<dyn CachePurger>,
    ) -> Result<()> {
        *self.config.write() = cfg.clone();

        let conn = Arc::new(db);
        let repo = Arc::new(crate::infra::storage::repositories::SeaOrmConfigRepository::new(conn));

        // Build event publisher (NoOp for now, can be replaced with real implementation)
        let event_publisher = Arc::new(NoOpEventPublisher);

        let service = Arc::new(Service::new(repo, cache_purger, event_publisher, cfg));
        service.init().await?;
        *self.service.write() = Some(service);

        tracing::info!("System config module initialized");
        Ok(())
    }

    /// Apply database migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("System config migrations completed");
        Ok(())
    }

    /// Mount the admin editor routes
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering system config REST routes");
        crate::api::rest::register_routes(router, service)
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn SystemConfigApi>> {
        let client = crate::api::native::NativeClient::new(self.service()?);
        Ok(Arc::new(client))
    }

    /// Module configuration in effect
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
