//! Common validation utilities.

use chrono::{NaiveDate, Utc};
use validator::ValidationError;

/// Validates that a birth date does not lie in the future.
pub fn validate_birth_date(birth_date: &NaiveDate) -> Result<(), ValidationError> {
    let today = Utc::now().date_naive();
    if *birth_date <= today {
        Ok(())
    } else {
        let mut err = ValidationError::new("birth_date_future");
        err.message = Some("Birth date cannot be in the future".into());
        Err(err)
    }
}
