//! Shared utilities and common types for the Contact Book backend.
//!
//! This crate provides functionality used across the other crates:
//! - Offset/limit pagination parameter types
//! - Common validation logic

pub mod pagination;
pub mod validation;
