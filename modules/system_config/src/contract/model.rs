//! Contract models for system config
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// Upper bound of `cache_max_age`, in seconds (three days)
pub const CACHE_MAX_AGE_LIMIT: i64 = 259_200;

/// The deployment's singleton configuration record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Display-only site label
    pub name: String,
    /// Canonical host name, scopes the CORS allowance
    pub domain: String,
    pub bind_addr: String,
    pub http_port: String,
    pub https_port: String,
    /// Operator contact
    pub admin_email: String,
    /// Server-generated credential used to sign internal requests
    pub client_secret: String,
    /// Server-generated cache-validation token
    pub etag: String,
    pub disable_cors: bool,
    pub disable_gzip: bool,
    pub disable_http_cache: bool,
    /// Seconds, always within `[0, CACHE_MAX_AGE_LIMIT]`
    pub cache_max_age: i64,
    pub backup_basic_auth_user: String,
    pub backup_basic_auth_password: String,
}

impl SiteConfig {
    pub fn clamp_cache_max_age(seconds: i64) -> i64 {
        seconds.clamp(0, CACHE_MAX_AGE_LIMIT)
    }

    /// Copy the server-owned fields (`client_secret`, `etag`) from `prior`
    pub fn retain_server_owned(&mut self, prior: &SiteConfig) {
        self.client_secret.clone_from(&prior.client_secret);
        self.etag.clone_from(&prior.etag);
    }
}

/// Result of an administrative save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// The record as persisted
    pub config: SiteConfig,
    /// Whether the cache purge ran for this save
    pub cache_invalidated: bool,
    /// Submit names of the fields whose value changed
    pub changed_fields: Vec<&'static str>,
}
