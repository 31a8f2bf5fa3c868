//! First-run record and server-owned token generation

use crate::config::Config;
use crate::contract::SiteConfig;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;

const CLIENT_SECRET_BYTES: usize = 64;

/// Random base64 client secret
pub fn generate_client_secret() -> String {
    let mut bytes = [0u8; CLIENT_SECRET_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

/// Fresh cache-validation token derived from the current time
pub fn new_etag() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    STANDARD.encode(nanos.to_string())
}

/// The record created the first time the service starts
pub fn bootstrap(cfg: &Config) -> SiteConfig {
    SiteConfig {
        bind_addr: cfg.default_bind_addr.clone(),
        http_port: cfg.default_http_port.clone(),
        https_port: cfg.default_https_port.clone(),
        client_secret: generate_client_secret(),
        etag: new_etag(),
        cache_max_age: SiteConfig::clamp_cache_max_age(cfg.default_cache_max_age),
        ..Default::default()
    }
}
