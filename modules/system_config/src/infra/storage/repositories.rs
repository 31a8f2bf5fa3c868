//! SeaORM repository implementations

use super::entity::{self, SINGLETON_ID};
use super::mapper::to_json;
use crate::contract::SiteConfig;
use crate::domain::repository::ConfigRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use std::sync::Arc;

// ===== Config Repository =====

pub struct SeaOrmConfigRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmConfigRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConfigRepository for SeaOrmConfigRepository {
    async fn load(&self) -> Result<Option<SiteConfig>> {
        entity::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await?
            .map(SiteConfig::try_from)
            .transpose()
    }

    async fn save(&self, config: &SiteConfig) -> Result<SiteConfig> {
        let data = to_json(config)?;
        let now = chrono::Utc::now();

        let existing = entity::Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await?;

        let result = match existing {
            Some(row) => {
                let mut active: entity::ActiveModel = row.into();
                active.data = Set(data);
                active.updated_at = Set(now);
                active.update(&*self.db).await?
            }
            None => {
                entity::ActiveModel {
                    id: Set(SINGLETON_ID),
                    data: Set(data),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&*self.db)
                .await?
            }
        };

        result.try_into()
    }
}
