//! Domain layer for the Contact Book backend.
//!
//! This crate contains:
//! - The `Contact` domain model and its validated input schemas
//! - Pure domain logic (upcoming-birthday window computation)

pub mod models;
pub mod services;
