//! Validation of decoded configuration values

use crate::contract::ConfigError;

/// Normalize and validate the canonical domain
///
/// Accepts:
/// - "" - no domain configured
/// - a bare host name (e.g. "example.com", "www.example.com")
/// - a host with a numeric port (e.g. "example.com:8443")
///
/// Rejects schemes, paths, whitespace and multiple hosts.
pub fn normalize_domain(domain: &str) -> Result<String, ConfigError> {
    let domain = domain.trim().to_ascii_lowercase();
    if domain.is_empty() {
        return Ok(domain);
    }

    if domain.contains("://") {
        return Err(invalid_domain(&domain, "must not include a scheme"));
    }

    if domain.contains(['/', '?', '#']) {
        return Err(invalid_domain(&domain, "must not include a path"));
    }

    if domain.contains(',') || domain.chars().any(char::is_whitespace) {
        return Err(invalid_domain(&domain, "must name a single host"));
    }

    let (host, port) = match domain.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (domain.as_str(), None),
    };

    if host.is_empty() || host.starts_with('.') || host.ends_with('.') || host.contains("..") {
        return Err(invalid_domain(&domain, "malformed host name"));
    }

    let is_valid_host = host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    if !is_valid_host {
        return Err(invalid_domain(
            &domain,
            "only alphanumeric, '-' and '.' are allowed in host names",
        ));
    }

    if let Some(port) = port {
        if port.is_empty() || validate_port(port).is_err() {
            return Err(invalid_domain(&domain, "invalid port"));
        }
    }

    Ok(domain)
}

/// Validate a port field: empty, or a number in 1-65535
pub fn validate_port(port: &str) -> Result<(), ConfigError> {
    if port.is_empty() {
        return Ok(());
    }
    match port.parse::<u16>() {
        Ok(p) if p > 0 => Ok(()),
        _ => Err(ConfigError::Validation {
            message: format!("Invalid port number: {}. Must be between 1 and 65535", port),
        }),
    }
}

/// Validate the operator contact: empty, or `local@domain`
pub fn validate_admin_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Ok(());
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ConfigError::Validation {
            message: format!("Invalid admin email: {}", email),
        }),
    }
}

fn invalid_domain(domain: &str, reason: &str) -> ConfigError {
    ConfigError::Validation {
        message: format!("Invalid domain '{}': {}", domain, reason),
    }
}
