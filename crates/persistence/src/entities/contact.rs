//! Contact entity (database row mapping).

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database row mapping for the contacts table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ContactEntity {
    pub id: i64,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
}

impl From<ContactEntity> for domain::models::Contact {
    fn from(entity: ContactEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            second_name: entity.second_name,
            email: entity.email,
            phone_number: entity.phone_number,
            birth_date: entity.birth_date,
        }
    }
}
