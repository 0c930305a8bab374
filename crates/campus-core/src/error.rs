//! Error types for the Campus system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampusError {
    /// Aggregated input validation failures: malformed identifiers,
    /// out-of-range fields, or a referenced group that does not
    /// exist. Maps to HTTP 400.
    #[error("Validation failed: {}", messages.join("; "))]
    Validation { messages: Vec<String> },

    /// A direct lookup by id yielded no record. Maps to HTTP 404.
    #[error("{message}")]
    NotFound { message: String },

    /// Storage-layer failure, including schema-constraint violations
    /// the service layer did not pre-validate. Propagated, not
    /// translated.
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CampusError {
    /// Validation failure carrying a single message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            messages: vec![message.into()],
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

pub type CampusResult<T> = Result<T, CampusError>;
