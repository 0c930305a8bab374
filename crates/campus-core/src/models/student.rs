//! Student domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::DocumentId;
use crate::validate::{Validate, Validator};

pub const BIRTH_DATE_IN_FUTURE: &str = "birthDate must not be later than current date";

/// A student's postal address. Stored inline on the student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAddress {
    pub country: String,
    pub town: String,
    pub address_string: String,
}

impl Validate for StudentAddress {
    fn validate(&self, v: &mut Validator) {
        v.not_blank("country", &self.country);
        v.not_blank("town", &self.town);
        v.not_blank("addressString", &self.address_string);
    }
}

/// A student as stored. `group_id` references a group that existed at
/// write time; the reference is not continuously enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: DocumentId,
    pub name: String,
    pub surname: String,
    pub group_id: DocumentId,
    pub birth_date: DateTime<Utc>,
    pub phone_numbers: Option<Vec<String>>,
    pub address: Option<StudentAddress>,
}

/// Creation request. `group_id` is untrusted input here; the student
/// service validates its format and the group's existence before the
/// storage write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    pub name: String,
    pub surname: String,
    pub group_id: String,
    pub birth_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<StudentAddress>,
}

impl Validate for CreateStudent {
    fn validate(&self, v: &mut Validator) {
        v.not_blank("name", &self.name);
        v.not_blank("surname", &self.surname);
        v.not_later_than_now("birthDate", self.birth_date, Some(BIRTH_DATE_IN_FUTURE));
        v.nested_opt("address", self.address.as_ref());
    }
}

/// Partial update request. Every field is optional; each present
/// field obeys the same rules as creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateStudent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<StudentAddress>,
}

impl Validate for UpdateStudent {
    fn validate(&self, v: &mut Validator) {
        if let Some(name) = &self.name {
            v.not_blank("name", name);
        }
        if let Some(surname) = &self.surname {
            v.not_blank("surname", surname);
        }
        if let Some(birth_date) = self.birth_date {
            v.not_later_than_now("birthDate", birth_date, Some(BIRTH_DATE_IN_FUTURE));
        }
        v.nested_opt("address", self.address.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CampusError;
    use crate::validate;
    use chrono::Duration;

    fn base_create() -> CreateStudent {
        CreateStudent {
            name: "Ada".into(),
            surname: "Lovelace".into(),
            group_id: "507f1f77bcf86cd799439011".into(),
            birth_date: Utc::now() - Duration::days(365 * 20),
            phone_numbers: None,
            address: None,
        }
    }

    #[test]
    fn valid_create_passes() {
        assert!(validate::validate(&base_create()).is_ok());
    }

    #[test]
    fn future_birth_date_and_blank_name_aggregate() {
        let input = CreateStudent {
            name: "".into(),
            birth_date: Utc::now() + Duration::days(1),
            ..base_create()
        };
        let err = validate::validate(&input).unwrap_err();
        let CampusError::Validation { messages } = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            messages,
            vec!["name should not be empty", BIRTH_DATE_IN_FUTURE]
        );
    }

    #[test]
    fn nested_address_rules_apply_only_when_present() {
        let input = CreateStudent {
            address: Some(StudentAddress {
                country: "".into(),
                town: "London".into(),
                address_string: "1 Baker St".into(),
            }),
            ..base_create()
        };
        let err = validate::validate(&input).unwrap_err();
        let CampusError::Validation { messages } = err else {
            panic!("expected validation error");
        };
        assert_eq!(messages, vec!["address.country should not be empty"]);

        assert!(validate::validate(&base_create()).is_ok());
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(validate::validate(&UpdateStudent::default()).is_ok());
    }

    #[test]
    fn present_update_fields_are_checked() {
        let input = UpdateStudent {
            surname: Some("   ".into()),
            birth_date: Some(Utc::now() + Duration::days(2)),
            ..Default::default()
        };
        let err = validate::validate(&input).unwrap_err();
        let CampusError::Validation { messages } = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            messages,
            vec!["surname should not be empty", BIRTH_DATE_IN_FUTURE]
        );
    }
}
