//! Contact repository for database operations.

use chrono::Utc;
use sqlx::PgPool;

use domain::models::{ContactUpdate, NewContact};
use domain::services::birthdays;
use shared::pagination::PageParams;

use crate::entities::ContactEntity;
use crate::error::PersistenceError;
use crate::metrics::QueryTimer;

/// Repository for contact database operations.
///
/// Holds a clone of a caller-owned `PgPool`; the repository never opens or
/// closes connections itself. Every method is a single-statement transaction.
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Creates a new ContactRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// List contacts in id order, skipping `offset` rows and returning at
    /// most `limit` rows.
    pub async fn list(&self, limit: u32, offset: u32) -> Result<Vec<ContactEntity>, PersistenceError> {
        let timer = QueryTimer::new("list_contacts");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, first_name, second_name, email, phone_number, birth_date
            FROM contacts
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(Into::into)
    }

    /// List contacts using validated page parameters.
    pub async fn list_page(&self, page: &PageParams) -> Result<Vec<ContactEntity>, PersistenceError> {
        self.list(page.limit, page.offset).await
    }

    /// Count all stored contacts.
    pub async fn count(&self) -> Result<i64, PersistenceError> {
        let timer = QueryTimer::new("count_contacts");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM contacts
            "#,
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result.map_err(Into::into)
    }

    /// Find a contact by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContactEntity>, PersistenceError> {
        let timer = QueryTimer::new("find_contact_by_id");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, first_name, second_name, email, phone_number, birth_date
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(Into::into)
    }

    /// Create a new contact from a validated payload.
    ///
    /// Fails with [`PersistenceError::DuplicateEmail`] when the email address
    /// is already taken.
    pub async fn create(&self, contact: &NewContact) -> Result<ContactEntity, PersistenceError> {
        let timer = QueryTimer::new("create_contact");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            INSERT INTO contacts (first_name, second_name, email, phone_number, birth_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, second_name, email, phone_number, birth_date
            "#,
        )
        .bind(&contact.first_name)
        .bind(&contact.second_name)
        .bind(&contact.email)
        .bind(&contact.phone_number)
        .bind(contact.birth_date)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result.map_err(Into::into)
    }

    /// Partially update a contact.
    ///
    /// Only fields present in the payload are overwritten; absent fields keep
    /// their stored values. Returns `None` when no contact has the given id.
    pub async fn update(
        &self,
        id: i64,
        update: &ContactUpdate,
    ) -> Result<Option<ContactEntity>, PersistenceError> {
        if update.is_empty() {
            return self.find_by_id(id).await;
        }

        let timer = QueryTimer::new("update_contact");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            UPDATE contacts
            SET
                first_name = COALESCE($2, first_name),
                second_name = COALESCE($3, second_name),
                email = COALESCE($4, email),
                phone_number = COALESCE($5, phone_number),
                birth_date = COALESCE($6, birth_date)
            WHERE id = $1
            RETURNING id, first_name, second_name, email, phone_number, birth_date
            "#,
        )
        .bind(id)
        .bind(update.first_name.as_deref())
        .bind(update.second_name.as_deref())
        .bind(update.email.as_deref())
        .bind(update.phone_number.as_deref())
        .bind(update.birth_date)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(Into::into)
    }

    /// Delete a contact, returning its prior state, or `None` when no contact
    /// has the given id.
    pub async fn delete(&self, id: i64) -> Result<Option<ContactEntity>, PersistenceError> {
        let timer = QueryTimer::new("delete_contact");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            DELETE FROM contacts
            WHERE id = $1
            RETURNING id, first_name, second_name, email, phone_number, birth_date
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(Into::into)
    }

    /// Case-insensitive substring search across first name, second name and
    /// email.
    pub async fn search(&self, query: &str) -> Result<Vec<ContactEntity>, PersistenceError> {
        let timer = QueryTimer::new("search_contacts");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, first_name, second_name, email, phone_number, birth_date
            FROM contacts
            WHERE first_name ILIKE '%' || $1 || '%'
               OR second_name ILIKE '%' || $1 || '%'
               OR email ILIKE '%' || $1 || '%'
            ORDER BY id
            "#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(Into::into)
    }

    /// Contacts whose birthday (month/day) falls within the next 7 days,
    /// today inclusive, ordered soonest-first.
    pub async fn upcoming_birthdays(&self) -> Result<Vec<ContactEntity>, PersistenceError> {
        let window = birthdays::upcoming_month_days(Utc::now().date_naive());

        let timer = QueryTimer::new("upcoming_birthdays");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, first_name, second_name, email, phone_number, birth_date
            FROM contacts
            WHERE to_char(birth_date, 'MM-DD') = ANY($1)
            ORDER BY array_position($1, to_char(birth_date, 'MM-DD')), id
            "#,
        )
        .bind(&window)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(Into::into)
    }
}
