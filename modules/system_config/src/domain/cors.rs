//! Same-origin allowance derived from the configured domain

use crate::contract::SiteConfig;
use url::Url;

/// Whether a cross-origin request from `origin` may read the site's data
///
/// With CORS enabled every origin is allowed. With CORS disabled only origins
/// whose host matches `domain` are; an empty domain allows none.
pub fn origin_allowed(config: &SiteConfig, origin: &str) -> bool {
    if !config.disable_cors {
        return true;
    }

    let domain = config.domain.trim().to_ascii_lowercase();
    if domain.is_empty() {
        return false;
    }

    let Ok(origin) = Url::parse(origin) else {
        return false;
    };
    let Some(host) = origin.host_str() else {
        return false;
    };

    match domain.split_once(':') {
        Some((domain_host, domain_port)) => {
            host == domain_host
                && origin
                    .port_or_known_default()
                    .map(|p| p.to_string() == domain_port)
                    .unwrap_or(false)
        }
        None => host == domain,
    }
}
