//! REST adapter for the admin editor

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;

pub use routes::register_routes;
