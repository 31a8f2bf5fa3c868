//! Mapper implementations for converting contract models into DTOs

use super::dto::SiteConfigDto;
use crate::contract;

impl From<&contract::SiteConfig> for SiteConfigDto {
    fn from(config: &contract::SiteConfig) -> Self {
        Self {
            name: config.name.clone(),
            domain: config.domain.clone(),
            bind_addr: config.bind_addr.clone(),
            http_port: config.http_port.clone(),
            https_port: config.https_port.clone(),
            admin_email: config.admin_email.clone(),
            etag: config.etag.clone(),
            cors_disabled: config.disable_cors,
            gzip_disabled: config.disable_gzip,
            cache_disabled: config.disable_http_cache,
            cache_max_age: config.cache_max_age,
            backup_basic_auth_user: config.backup_basic_auth_user.clone(),
            backup_basic_auth_password_set: !config.backup_basic_auth_password.is_empty(),
        }
    }
}
