//! Domain layer - business logic and services

pub mod bootstrap;
pub mod cache;
pub mod cors;
pub mod editor;
pub mod events;
pub mod repository;
pub mod service;
pub mod validation;

pub use cache::{CachePurger, NoOpCachePurger};
pub use events::{ConfigEvent, EventPublisher, NoOpEventPublisher};
pub use repository::ConfigRepository;
pub use service::Service;
