//! Storage layer - database entity, mapper and repository

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
