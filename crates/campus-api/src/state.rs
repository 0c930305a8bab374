//! Shared handler state.

use campus_db::repository::{SurrealGroupRepository, SurrealStudentRepository};
use campus_service::group::GroupService;
use campus_service::student::StudentService;
use surrealdb::{Connection, Surreal};

type Groups<C> = GroupService<SurrealGroupRepository<C>>;
type Students<C> = StudentService<SurrealStudentRepository<C>, Groups<C>>;

/// Services shared by every handler. Cheap to clone; the underlying
/// connection is reference-counted.
#[derive(Clone)]
pub struct AppState<C: Connection + Clone> {
    pub groups: Groups<C>,
    pub students: Students<C>,
}

impl<C: Connection + Clone> AppState<C> {
    /// Wire both services over a single database connection. The
    /// group service doubles as the student service's group-existence
    /// collaborator.
    pub fn new(db: Surreal<C>) -> Self {
        let groups = GroupService::new(SurrealGroupRepository::new(db.clone()));
        let students = StudentService::new(SurrealStudentRepository::new(db), groups.clone());
        Self { groups, students }
    }
}
