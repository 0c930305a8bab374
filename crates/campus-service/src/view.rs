//! Response view shapes.
//!
//! Views are per-request projections of stored records; they are
//! never persisted and carry no identity beyond the response.

use campus_core::models::group::Group;
use campus_core::models::student::{Student, StudentAddress};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Group list entry: `{_id, name, startYear}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub start_year: i32,
}

impl From<Group> for GroupView {
    fn from(group: Group) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name,
            start_year: group.start_year,
        }
    }
}

/// Full student details returned by a direct lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    pub name: String,
    pub surname: String,
    pub group_id: String,
    pub birth_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<StudentAddress>,
}

impl From<Student> for StudentDetails {
    fn from(student: Student) -> Self {
        Self {
            name: student.name,
            surname: student.surname,
            group_id: student.group_id.to_string(),
            birth_date: student.birth_date,
            phone_numbers: student.phone_numbers,
            address: student.address,
        }
    }
}

/// Student summary with the computed full name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub group_id: String,
}

impl From<Student> for StudentInfo {
    fn from(student: Student) -> Self {
        Self {
            id: student.id.to_string(),
            full_name: format!("{} {}", student.name, student.surname),
            group_id: student.group_id.to_string(),
        }
    }
}
