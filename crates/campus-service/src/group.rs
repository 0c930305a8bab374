//! Group service — listing, creation, and the existence primitive.

use campus_core::error::{CampusError, CampusResult};
use campus_core::id::DocumentId;
use campus_core::models::group::CreateGroup;
use campus_core::repository::GroupRepository;
use campus_core::validate;
use tracing::debug;

use crate::view::GroupView;

/// Cross-entity existence seam. The student service checks
/// `group_id` references through this trait instead of coupling to
/// group storage directly.
pub trait GroupLookup: Send + Sync {
    /// Returns whether a group with the given identifier exists.
    /// Fails with a validation error when the identifier is
    /// malformed; no storage call is made in that case.
    fn exists(&self, id: &str) -> impl Future<Output = CampusResult<bool>> + Send;
}

#[derive(Clone)]
pub struct GroupService<R: GroupRepository> {
    repo: R,
}

impl<R: GroupRepository> GroupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Every stored group mapped to the list view. No filtering, no
    /// pagination.
    pub async fn list(&self) -> CampusResult<Vec<GroupView>> {
        let groups = self.repo.list().await?;
        Ok(groups.into_iter().map(GroupView::from).collect())
    }

    /// Validate the creation request, persist it, and return the new
    /// identifier. Nothing is written when any field rule fails.
    pub async fn create(&self, input: CreateGroup) -> CampusResult<DocumentId> {
        validate::validate(&input)?;
        let id = self.repo.create(input).await?;
        debug!(group_id = %id, "group created");
        Ok(id)
    }
}

impl<R: GroupRepository> GroupLookup for GroupService<R> {
    async fn exists(&self, id: &str) -> CampusResult<bool> {
        let Some(parsed) = DocumentId::parse(id) else {
            return Err(CampusError::validation(format!("Group id {id} is invalid")));
        };
        self.repo.exists(&parsed).await
    }
}
