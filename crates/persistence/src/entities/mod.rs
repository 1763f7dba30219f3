//! Entity definitions (database row mappings).

pub mod contact;

pub use contact::ContactEntity;
