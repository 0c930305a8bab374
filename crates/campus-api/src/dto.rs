//! Wire request bodies.
//!
//! Create and update bodies hold their fields as raw JSON values. A
//! strict serde pass would stop at the first missing or mistyped
//! field; parsing loosely lets presence and type failures collect in
//! the same [`Validator`] run as the value rules, so one response
//! carries every problem.

use campus_core::error::{CampusError, CampusResult};
use campus_core::models::group::{
    CreateGroup, GROUP_NAME_TOO_SHORT, GROUP_START_YEAR_TOO_SMALL, MIN_GROUP_NAME_LEN,
    MIN_GROUP_START_YEAR,
};
use campus_core::models::student::{
    BIRTH_DATE_IN_FUTURE, CreateStudent, StudentAddress, UpdateStudent,
};
use campus_core::validate::Validator;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupCreateBody {
    name: Option<Value>,
    start_year: Option<Value>,
}

impl GroupCreateBody {
    pub fn into_domain(self) -> CampusResult<CreateGroup> {
        let mut v = Validator::new();

        let name = required_string(&mut v, "name", self.name);
        if let Some(name) = &name {
            v.min_length("name", name, MIN_GROUP_NAME_LEN, Some(GROUP_NAME_TOO_SHORT));
        }

        let start_year = required_int(&mut v, "startYear", self.start_year);
        if let Some(year) = start_year {
            v.min_value(
                "startYear",
                i64::from(year),
                i64::from(MIN_GROUP_START_YEAR),
                Some(GROUP_START_YEAR_TOO_SMALL),
            );
        }

        v.into_result()?;
        let (Some(name), Some(start_year)) = (name, start_year) else {
            return Err(CampusError::Internal(
                "group body rejected without a message".into(),
            ));
        };
        Ok(CreateGroup { name, start_year })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentCreateBody {
    name: Option<Value>,
    surname: Option<Value>,
    group_id: Option<Value>,
    birth_date: Option<Value>,
    phone_numbers: Option<Value>,
    address: Option<Value>,
}

impl StudentCreateBody {
    /// Field rules mirror the domain input's own; the group reference
    /// itself is checked by the student service.
    pub fn into_domain(self) -> CampusResult<CreateStudent> {
        let mut v = Validator::new();

        let name = required_string(&mut v, "name", self.name);
        if let Some(name) = &name {
            v.not_blank("name", name);
        }
        let surname = required_string(&mut v, "surname", self.surname);
        if let Some(surname) = &surname {
            v.not_blank("surname", surname);
        }
        let group_id = required_string(&mut v, "groupId", self.group_id);
        let birth_date = required_datetime(&mut v, "birthDate", self.birth_date);
        if let Some(birth_date) = birth_date {
            v.not_later_than_now("birthDate", birth_date, Some(BIRTH_DATE_IN_FUTURE));
        }
        let phone_numbers = opt_string_list(&mut v, "phoneNumbers", self.phone_numbers);
        let address = opt_address(&mut v, self.address);

        v.into_result()?;
        let (Some(name), Some(surname), Some(group_id), Some(birth_date)) =
            (name, surname, group_id, birth_date)
        else {
            return Err(CampusError::Internal(
                "student body rejected without a message".into(),
            ));
        };
        Ok(CreateStudent {
            name,
            surname,
            group_id,
            birth_date,
            phone_numbers,
            address,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentUpdateBody {
    name: Option<Value>,
    surname: Option<Value>,
    group_id: Option<Value>,
    birth_date: Option<Value>,
    phone_numbers: Option<Value>,
    address: Option<Value>,
}

impl StudentUpdateBody {
    /// Absent fields impose nothing; present fields obey the same
    /// gates and rules as creation.
    pub fn into_domain(self) -> CampusResult<UpdateStudent> {
        let mut v = Validator::new();

        let name = opt_string(&mut v, "name", self.name);
        if let Some(name) = &name {
            v.not_blank("name", name);
        }
        let surname = opt_string(&mut v, "surname", self.surname);
        if let Some(surname) = &surname {
            v.not_blank("surname", surname);
        }
        let group_id = opt_string(&mut v, "groupId", self.group_id);
        let birth_date = opt_datetime(&mut v, "birthDate", self.birth_date);
        if let Some(birth_date) = birth_date {
            v.not_later_than_now("birthDate", birth_date, Some(BIRTH_DATE_IN_FUTURE));
        }
        let phone_numbers = opt_string_list(&mut v, "phoneNumbers", self.phone_numbers);
        let address = opt_address(&mut v, self.address);

        v.into_result()?;
        Ok(UpdateStudent {
            name,
            surname,
            group_id,
            birth_date,
            phone_numbers,
            address,
        })
    }
}

fn required_string(v: &mut Validator, field: &str, value: Option<Value>) -> Option<String> {
    if value.is_none() {
        v.fail(format!("{field} must be a string"));
        return None;
    }
    opt_string(v, field, value)
}

fn opt_string(v: &mut Validator, field: &str, value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        _ => {
            v.fail(format!("{field} must be a string"));
            None
        }
    }
}

fn required_int(v: &mut Validator, field: &str, value: Option<Value>) -> Option<i32> {
    if value.is_none() {
        v.fail(format!("{field} must be an integer number"));
        return None;
    }
    let parsed = value
        .as_ref()
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok());
    if parsed.is_none() {
        v.fail(format!("{field} must be an integer number"));
    }
    parsed
}

fn required_datetime(
    v: &mut Validator,
    field: &str,
    value: Option<Value>,
) -> Option<DateTime<Utc>> {
    if value.is_none() {
        v.fail(format!("{field} must be a valid ISO 8601 date string"));
        return None;
    }
    opt_datetime(v, field, value)
}

fn opt_datetime(v: &mut Validator, field: &str, value: Option<Value>) -> Option<DateTime<Utc>> {
    let value = value?;
    let parsed = value
        .as_str()
        .and_then(|s| s.parse::<DateTime<Utc>>().ok());
    if parsed.is_none() {
        v.fail(format!("{field} must be a valid ISO 8601 date string"));
    }
    parsed
}

fn opt_string_list(v: &mut Validator, field: &str, value: Option<Value>) -> Option<Vec<String>> {
    let Value::Array(items) = value? else {
        v.fail(format!("{field} must be an array"));
        return None;
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => out.push(s),
            _ => {
                v.fail(format!("each value in {field} must be a string"));
                return None;
            }
        }
    }
    Some(out)
}

fn opt_address(v: &mut Validator, value: Option<Value>) -> Option<StudentAddress> {
    let Value::Object(mut map) = value? else {
        v.fail("address must be an object");
        return None;
    };

    let country = required_string(v, "address.country", map.remove("country"));
    let town = required_string(v, "address.town", map.remove("town"));
    let address_string = required_string(v, "address.addressString", map.remove("addressString"));

    let (Some(country), Some(town), Some(address_string)) = (country, town, address_string) else {
        return None;
    };
    let address = StudentAddress {
        country,
        town,
        address_string,
    };
    // Value rules on the typed object; failures come back prefixed
    // with "address.".
    v.nested_opt("address", Some(&address));
    Some(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn messages<T>(result: CampusResult<T>) -> Vec<String> {
        match result {
            Err(CampusError::Validation { messages }) => messages,
            Err(other) => panic!("expected validation error, got: {other:?}"),
            Ok(_) => panic!("expected validation error, got success"),
        }
    }

    fn group_body(value: Value) -> GroupCreateBody {
        serde_json::from_value(value).unwrap()
    }

    fn student_create_body(value: Value) -> StudentCreateBody {
        serde_json::from_value(value).unwrap()
    }

    fn student_update_body(value: Value) -> StudentUpdateBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn group_missing_field_aggregates_with_value_rules() {
        let result = group_body(json!({ "startYear": 2019 })).into_domain();
        assert_eq!(
            messages(result),
            vec!["name must be a string", GROUP_START_YEAR_TOO_SMALL]
        );
    }

    #[test]
    fn group_type_failures_are_collected_per_field() {
        let result = group_body(json!({ "name": 7, "startYear": "soon" })).into_domain();
        assert_eq!(
            messages(result),
            vec!["name must be a string", "startYear must be an integer number"]
        );
    }

    #[test]
    fn valid_group_body_maps_to_domain() {
        let input = group_body(json!({ "name": "CS-101", "startYear": 2024 }))
            .into_domain()
            .unwrap();
        assert_eq!(input.name, "CS-101");
        assert_eq!(input.start_year, 2024);
    }

    #[test]
    fn student_create_mixes_presence_type_and_value_failures() {
        let future = (Utc::now() + Duration::days(1)).to_rfc3339();
        let result = student_create_body(json!({
            "name": 7,
            "groupId": "507f1f77bcf86cd799439011",
            "birthDate": future,
            "phoneNumbers": "not-a-list"
        }))
        .into_domain();
        assert_eq!(
            messages(result),
            vec![
                "name must be a string",
                "surname must be a string",
                BIRTH_DATE_IN_FUTURE,
                "phoneNumbers must be an array",
            ]
        );
    }

    #[test]
    fn student_create_checks_address_fields() {
        let result = student_create_body(json!({
            "name": "Ada",
            "surname": "Lovelace",
            "groupId": "507f1f77bcf86cd799439011",
            "birthDate": "1995-06-01T00:00:00Z",
            "address": { "country": "UK", "town": 3 }
        }))
        .into_domain();
        assert_eq!(
            messages(result),
            vec![
                "address.town must be a string",
                "address.addressString must be a string",
            ]
        );
    }

    #[test]
    fn empty_update_body_is_valid() {
        let update = student_update_body(json!({})).into_domain().unwrap();
        assert!(update.name.is_none());
        assert!(update.birth_date.is_none());
    }

    #[test]
    fn present_update_fields_are_gated() {
        let result = student_update_body(json!({
            "surname": "   ",
            "birthDate": "not-a-date"
        }))
        .into_domain();
        assert_eq!(
            messages(result),
            vec![
                "surname should not be empty",
                "birthDate must be a valid ISO 8601 date string",
            ]
        );
    }
}
