//! Contact model and request schemas.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored contact, as returned to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
}

/// Request payload for creating a contact.
///
/// Callers must run `validate()` before handing the payload to the
/// repository; the persistence layer trusts the shape it receives.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct NewContact {
    #[validate(length(min = 3, max = 50, message = "First name must be 3-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 3, max = 50, message = "Second name must be 3-50 characters"))]
    pub second_name: String,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, max = 21, message = "Phone number must be 6-21 characters"))]
    pub phone_number: String,

    #[validate(custom(function = "shared::validation::validate_birth_date"))]
    pub birth_date: NaiveDate,
}

/// Request payload for partially updating a contact.
///
/// Every field is optional; a field absent from the payload leaves the stored
/// value untouched. Constraints apply only to fields that are present.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct ContactUpdate {
    #[validate(length(min = 3, max = 50, message = "First name must be 3-50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 3, max = 50, message = "Second name must be 3-50 characters"))]
    pub second_name: Option<String>,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 21, message = "Phone number must be 6-21 characters"))]
    pub phone_number: Option<String>,

    #[validate(custom(function = "shared::validation::validate_birth_date"))]
    pub birth_date: Option<NaiveDate>,
}

impl ContactUpdate {
    /// Returns true when no field is present, i.e. applying the update would
    /// change nothing.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.second_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.birth_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_new_contact() -> NewContact {
        serde_json::from_str(
            r#"{
                "first_name": "Alice",
                "second_name": "Smith",
                "email": "alice.smith@example.com",
                "phone_number": "555-0100",
                "birth_date": "1990-06-15"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_new_contact_valid() {
        let contact = valid_new_contact();
        assert!(contact.validate().is_ok());
        assert_eq!(contact.first_name, "Alice");
        assert_eq!(contact.birth_date, NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    }

    #[test]
    fn test_new_contact_first_name_too_short() {
        let mut contact = valid_new_contact();
        contact.first_name = "Al".to_string();
        let errors = contact.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_new_contact_name_length_bounds() {
        let mut contact = valid_new_contact();
        contact.second_name = "a".repeat(50);
        assert!(contact.validate().is_ok());

        contact.second_name = "a".repeat(51);
        let errors = contact.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("second_name"));

        contact.second_name = "Ann".to_string();
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn test_new_contact_invalid_email() {
        let mut contact = valid_new_contact();
        contact.email = "not-an-email".to_string();
        let errors = contact.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_new_contact_phone_number_bounds() {
        let mut contact = valid_new_contact();
        contact.phone_number = "12345".to_string();
        assert!(contact.validate().is_err());

        contact.phone_number = "123456".to_string();
        assert!(contact.validate().is_ok());

        contact.phone_number = "1".repeat(21);
        assert!(contact.validate().is_ok());

        contact.phone_number = "1".repeat(22);
        assert!(contact.validate().is_err());
    }

    #[test]
    fn test_new_contact_future_birth_date() {
        let mut contact = valid_new_contact();
        contact.birth_date = chrono::Utc::now().date_naive() + chrono::Duration::days(30);
        let errors = contact.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("birth_date"));
    }

    #[test]
    fn test_contact_update_partial_deserialization() {
        let update: ContactUpdate =
            serde_json::from_str(r#"{"email": "new.address@example.com"}"#).unwrap();
        assert_eq!(update.email.as_deref(), Some("new.address@example.com"));
        assert!(update.first_name.is_none());
        assert!(update.second_name.is_none());
        assert!(update.phone_number.is_none());
        assert!(update.birth_date.is_none());
        assert!(update.validate().is_ok());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_contact_update_empty_payload() {
        let update: ContactUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_contact_update_future_birth_date() {
        let update = ContactUpdate {
            birth_date: Some(chrono::Utc::now().date_naive() + chrono::Duration::days(1)),
            ..Default::default()
        };
        let errors = update.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("birth_date"));
    }

    #[test]
    fn test_contact_update_validates_present_fields() {
        let update: ContactUpdate = serde_json::from_str(r#"{"first_name": "Al"}"#).unwrap();
        let errors = update.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_contact_serializes_with_id() {
        let contact = Contact {
            id: 7,
            first_name: "Alice".to_string(),
            second_name: "Smith".to_string(),
            email: "alice.smith@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["birth_date"], "1990-06-15");
    }
}
