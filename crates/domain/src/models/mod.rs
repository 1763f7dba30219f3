//! Domain models for the Contact Book.

pub mod contact;

pub use contact::{Contact, ContactUpdate, NewContact};
