//! SurrealDB repository implementations.

mod group;
mod student;

pub use group::SurrealGroupRepository;
pub use student::SurrealStudentRepository;
