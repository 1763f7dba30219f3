//! Repository implementations.

pub mod contact;

pub use contact::ContactRepository;
