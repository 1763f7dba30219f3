//! Persistence error type.

use thiserror::Error;

/// Postgres error code for a unique-constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Errors surfaced by repository operations.
///
/// Absence of a record is never an error; lookups signal it with `None` and
/// list queries with an empty `Vec`.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A contact with the given email address already exists.
    #[error("A contact with this email address already exists")]
    DuplicateEmail,

    /// Any other database failure (connectivity, constraint, syntax).
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return PersistenceError::DuplicateEmail;
            }
        }
        PersistenceError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_maps_to_database_variant() {
        let err = PersistenceError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, PersistenceError::Database(_)));
    }

    #[test]
    fn test_duplicate_email_display() {
        let err = PersistenceError::DuplicateEmail;
        assert_eq!(
            err.to_string(),
            "A contact with this email address already exists"
        );
    }
}
