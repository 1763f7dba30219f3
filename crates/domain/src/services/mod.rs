//! Pure domain logic.

pub mod birthdays;
