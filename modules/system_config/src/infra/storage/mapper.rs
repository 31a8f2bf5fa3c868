//! Entity to model mappers
//!
//! Conversions between the stored JSON record and the contract model

use super::entity;
use crate::contract::SiteConfig;
use serde::{Deserialize, Serialize};

/// Persisted representation, keyed by canonical external names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfigRecord {
    pub name: String,
    pub domain: String,
    pub bind_addr: String,
    pub http_port: String,
    pub https_port: String,
    pub admin_email: String,
    pub client_secret: String,
    pub etag: String,
    pub cors_disabled: bool,
    pub gzip_disabled: bool,
    pub cache_disabled: bool,
    pub cache_max_age: i64,
    /// Invalidate command flags; written empty, never read back
    pub cache: Vec<String>,
    pub backup_basic_auth_user: String,
    pub backup_basic_auth_password: String,
}

impl From<&SiteConfig> for SiteConfigRecord {
    fn from(config: &SiteConfig) -> Self {
        Self {
            name: config.name.clone(),
            domain: config.domain.clone(),
            bind_addr: config.bind_addr.clone(),
            http_port: config.http_port.clone(),
            https_port: config.https_port.clone(),
            admin_email: config.admin_email.clone(),
            client_secret: config.client_secret.clone(),
            etag: config.etag.clone(),
            cors_disabled: config.disable_cors,
            gzip_disabled: config.disable_gzip,
            cache_disabled: config.disable_http_cache,
            cache_max_age: config.cache_max_age,
            cache: Vec::new(),
            backup_basic_auth_user: config.backup_basic_auth_user.clone(),
            backup_basic_auth_password: config.backup_basic_auth_password.clone(),
        }
    }
}

impl From<SiteConfigRecord> for SiteConfig {
    fn from(record: SiteConfigRecord) -> Self {
        Self {
            name: record.name,
            domain: record.domain,
            bind_addr: record.bind_addr,
            http_port: record.http_port,
            https_port: record.https_port,
            admin_email: record.admin_email,
            client_secret: record.client_secret,
            etag: record.etag,
            disable_cors: record.cors_disabled,
            disable_gzip: record.gzip_disabled,
            disable_http_cache: record.cache_disabled,
            cache_max_age: SiteConfig::clamp_cache_max_age(record.cache_max_age),
            backup_basic_auth_user: record.backup_basic_auth_user,
            backup_basic_auth_password: record.backup_basic_auth_password,
        }
    }
}

impl TryFrom<entity::Model> for SiteConfig {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let record: SiteConfigRecord = serde_json::from_value(entity.data)?;
        Ok(record.into())
    }
}

/// JSON document stored in the `data` column
pub fn to_json(config: &SiteConfig) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(SiteConfigRecord::from(config))?)
}
