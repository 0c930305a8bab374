//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. The services own no state;
//! each request is a single sequential chain of these calls.

use crate::error::CampusResult;
use crate::id::DocumentId;
use crate::models::group::{CreateGroup, Group};
use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Pagination parameters for filtered student queries.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { skip: 0, limit: 50 }
    }
}

/// Exact-match filter for student queries. Absent fields impose no
/// constraint; present fields combine with AND semantics.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub group_id: Option<DocumentId>,
}

pub trait GroupRepository: Send + Sync {
    /// Persist a new group and return the storage-assigned identifier.
    fn create(&self, input: CreateGroup) -> impl Future<Output = CampusResult<DocumentId>> + Send;

    /// Every stored group, in creation order.
    fn list(&self) -> impl Future<Output = CampusResult<Vec<Group>>> + Send;

    /// Boolean existence check by identifier.
    fn exists(&self, id: &DocumentId) -> impl Future<Output = CampusResult<bool>> + Send;
}

pub trait StudentRepository: Send + Sync {
    /// Persist a new student and return the storage-assigned
    /// identifier.
    fn create(&self, input: CreateStudent)
    -> impl Future<Output = CampusResult<DocumentId>> + Send;

    fn get_by_id(
        &self,
        id: &DocumentId,
    ) -> impl Future<Output = CampusResult<Option<Student>>> + Send;

    /// Partial update; absent fields are left untouched. Updating a
    /// missing record is a no-op.
    fn update(
        &self,
        id: &DocumentId,
        input: UpdateStudent,
    ) -> impl Future<Output = CampusResult<()>> + Send;

    /// Exact-match filter with optional pagination; `None` returns
    /// every matching record.
    fn find(
        &self,
        filter: StudentFilter,
        pagination: Option<Pagination>,
    ) -> impl Future<Output = CampusResult<Vec<Student>>> + Send;

    /// Delete by identifier; deleting a missing record is a no-op.
    fn delete(&self, id: &DocumentId) -> impl Future<Output = CampusResult<()>> + Send;
}
