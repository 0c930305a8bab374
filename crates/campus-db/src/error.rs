//! Database-specific error types and conversions.

use campus_core::error::CampusError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    /// A write rejected by the schema's own constraints (the storage
    /// engine's second line of defense). The service layer normally
    /// pre-validates, so reaching this is unexpected.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A stored record that does not round-trip into a domain model.
    #[error("Malformed record: {0}")]
    Malformed(String),
}

impl From<DbError> for CampusError {
    fn from(err: DbError) -> Self {
        CampusError::Database(err.to_string())
    }
}
