//! Group domain model.

use serde::{Deserialize, Serialize};

use crate::id::DocumentId;
use crate::validate::{Validate, Validator};

/// Minimum length of a group name.
pub const MIN_GROUP_NAME_LEN: usize = 2;
/// Earliest start year a group may be created with.
pub const MIN_GROUP_START_YEAR: i32 = 2020;

pub const GROUP_NAME_TOO_SHORT: &str = "name must be longer than or equal to 2 characters";
pub const GROUP_START_YEAR_TOO_SMALL: &str = "startYear must not be less than 2020";

/// A student group. Immutable after creation; no update operation
/// exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: DocumentId,
    pub name: String,
    pub start_year: i32,
}

/// Creation request for a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroup {
    pub name: String,
    pub start_year: i32,
}

impl Validate for CreateGroup {
    fn validate(&self, v: &mut Validator) {
        v.min_length(
            "name",
            &self.name,
            MIN_GROUP_NAME_LEN,
            Some(GROUP_NAME_TOO_SHORT),
        );
        v.min_value(
            "startYear",
            i64::from(self.start_year),
            i64::from(MIN_GROUP_START_YEAR),
            Some(GROUP_START_YEAR_TOO_SMALL),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CampusError;
    use crate::validate;

    #[test]
    fn valid_request_passes() {
        assert!(
            validate::validate(&CreateGroup {
                name: "Group".into(),
                start_year: 2025,
            })
            .is_ok()
        );
    }

    #[test]
    fn short_name_and_old_year_reported_together() {
        let err = validate::validate(&CreateGroup {
            name: "G".into(),
            start_year: 2019,
        })
        .unwrap_err();

        let CampusError::Validation { messages } = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            messages,
            vec![GROUP_NAME_TOO_SHORT, GROUP_START_YEAR_TOO_SMALL]
        );
    }
}
