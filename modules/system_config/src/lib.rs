//! System Config Module
//!
//! Manages the deployment's singleton configuration record and the
//! administrative editor generated from it. The record declares, field by
//! field, how it renders as a form and how a submitted form maps back onto it.

// Public exports
pub mod contract;
pub use contract::{
    client::SystemConfigApi, error::ConfigError, SaveOutcome, SiteConfig, CACHE_MAX_AGE_LIMIT,
};

pub mod editor;

pub mod module;
pub use module::SystemConfigModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
