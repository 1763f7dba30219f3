//! Persistence layer for the Contact Book backend.
//!
//! This crate contains:
//! - Database connection pool management and migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - The persistence error type

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;

pub use error::PersistenceError;
