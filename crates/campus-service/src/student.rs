//! Student service — per-operation validation chains around student
//! storage.

use campus_core::error::{CampusError, CampusResult};
use campus_core::id::DocumentId;
use campus_core::models::student::{CreateStudent, UpdateStudent};
use campus_core::repository::{Pagination, StudentFilter, StudentRepository};
use campus_core::validate;
use serde::Deserialize;
use tracing::debug;

use crate::group::GroupLookup;
use crate::view::{StudentDetails, StudentInfo};

/// Search request: any combination of exact-match fields plus
/// pagination. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentQuery {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub group_id: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Clone)]
pub struct StudentService<R, G> {
    repo: R,
    groups: G,
}

impl<R: StudentRepository, G: GroupLookup> StudentService<R, G> {
    pub fn new(repo: R, groups: G) -> Self {
        Self { repo, groups }
    }

    /// Fetch full details by identifier.
    pub async fn get(&self, id: &str) -> CampusResult<StudentDetails> {
        let id = parse_id(id)?;
        let student = self
            .repo
            .get_by_id(&id)
            .await?
            .ok_or_else(|| CampusError::not_found(format!("Student with id {id} not found.")))?;
        Ok(StudentDetails::from(student))
    }

    /// Validate all fields, check the referenced group, and persist.
    /// A failed group check prevents the write entirely.
    pub async fn create(&self, input: CreateStudent) -> CampusResult<DocumentId> {
        validate::validate(&input)?;
        self.check_group(&input.group_id).await?;
        let id = self.repo.create(input).await?;
        debug!(student_id = %id, "student created");
        Ok(id)
    }

    /// Partial update: present fields obey the same rules as
    /// creation, and a present `group_id` re-runs the existence
    /// check.
    pub async fn update(&self, id: &str, input: UpdateStudent) -> CampusResult<()> {
        let id = parse_id(id)?;
        validate::validate(&input)?;
        if let Some(group_id) = &input.group_id {
            self.check_group(group_id).await?;
        }
        self.repo.update(&id, input).await
    }

    /// Every student in the given group, unbounded.
    pub async fn list_by_group(&self, group_id: &str) -> CampusResult<Vec<StudentInfo>> {
        let group_id = parse_id(group_id)?;
        let students = self
            .repo
            .find(
                StudentFilter {
                    group_id: Some(group_id),
                    ..Default::default()
                },
                None,
            )
            .await?;
        Ok(students.into_iter().map(StudentInfo::from).collect())
    }

    /// Filtered, paginated search. Provided fields combine with AND
    /// semantics.
    pub async fn search(&self, query: StudentQuery) -> CampusResult<Vec<StudentInfo>> {
        let group_id = match query.group_id.as_deref() {
            Some(raw) => Some(parse_id(raw)?),
            None => None,
        };
        let filter = StudentFilter {
            name: query.name,
            surname: query.surname,
            group_id,
        };
        let defaults = Pagination::default();
        let pagination = Pagination {
            skip: query.skip.unwrap_or(defaults.skip),
            limit: query.limit.unwrap_or(defaults.limit),
        };
        let students = self.repo.find(filter, Some(pagination)).await?;
        Ok(students.into_iter().map(StudentInfo::from).collect())
    }

    /// Delete by identifier. No prior existence check: removing a
    /// missing student is an idempotent no-op.
    pub async fn remove(&self, id: &str) -> CampusResult<()> {
        let id = parse_id(id)?;
        self.repo.delete(&id).await
    }

    /// Referential integrity: the referenced group must exist at the
    /// moment of this check. The group may still be deleted between
    /// the check and the student write; that race is accepted.
    async fn check_group(&self, group_id: &str) -> CampusResult<()> {
        if !self.groups.exists(group_id).await? {
            return Err(CampusError::validation(format!(
                "Group with id {group_id} doesn't exists."
            )));
        }
        Ok(())
    }
}

fn parse_id(id: &str) -> CampusResult<DocumentId> {
    DocumentId::parse(id).ok_or_else(|| CampusError::validation(format!("id {id} is not valid")))
}
