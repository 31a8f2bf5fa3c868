//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::SystemConfigApi;
pub use error::ConfigError;
pub use model::{SaveOutcome, SiteConfig, CACHE_MAX_AGE_LIMIT};
