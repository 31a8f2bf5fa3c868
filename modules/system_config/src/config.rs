//! Configuration for the system config module

use serde::Deserialize;

/// System config module configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Title shown at the top of the editor card
    #[serde(default = "default_editor_title")]
    pub editor_title: String,

    /// Path the editor form submits to
    #[serde(default = "default_editor_action")]
    pub editor_action: String,

    /// Bind address written into the record on first run
    #[serde(default = "default_bind_addr")]
    pub default_bind_addr: String,

    /// HTTP port written into the record on first run
    #[serde(default = "default_http_port")]
    pub default_http_port: String,

    /// HTTPS port written into the record on first run
    #[serde(default = "default_https_port")]
    pub default_https_port: String,

    /// Cache max-age (seconds) written into the record on first run
    #[serde(default = "default_cache_max_age")]
    pub default_cache_max_age: i64,

    /// Issue a fresh etag whenever a save invalidates the cache
    #[serde(default = "default_true")]
    pub rotate_etag_on_invalidate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor_title: default_editor_title(),
            editor_action: default_editor_action(),
            default_bind_addr: default_bind_addr(),
            default_http_port: default_http_port(),
            default_https_port: default_https_port(),
            default_cache_max_age: default_cache_max_age(),
            rotate_etag_on_invalidate: true,
        }
    }
}

impl Config {
    /// Parse the module section of a YAML config file
    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

fn default_editor_title() -> String {
    "System Configuration".to_string()
}

fn default_editor_action() -> String {
    "/admin/configure".to_string()
}

fn default_bind_addr() -> String {
    "localhost".to_string()
}

fn default_http_port() -> String {
    "8080".to_string()
}

fn default_https_port() -> String {
    "443".to_string()
}

fn default_cache_max_age() -> i64 {
    crate::contract::CACHE_MAX_AGE_LIMIT
}

fn default_true() -> bool {
    true
}
