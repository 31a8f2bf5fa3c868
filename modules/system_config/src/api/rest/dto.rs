//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// System config response DTO
///
/// Secrets are never returned: the client secret is omitted and the backup
/// password is reduced to a presence flag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteConfigDto {
    /// Display-only site label
    #[schema(example = "My Site")]
    pub name: String,

    /// Canonical host name
    #[schema(example = "example.com")]
    pub domain: String,

    pub bind_addr: String,

    #[schema(example = "8080")]
    pub http_port: String,

    #[schema(example = "443")]
    pub https_port: String,

    pub admin_email: String,

    /// Current cache-validation token
    pub etag: String,

    pub cors_disabled: bool,

    pub gzip_disabled: bool,

    pub cache_disabled: bool,

    /// Seconds, 0 - 259200
    #[schema(example = 259200)]
    pub cache_max_age: i64,

    pub backup_basic_auth_user: String,

    /// Whether a backup password is set
    pub backup_basic_auth_password_set: bool,
}
