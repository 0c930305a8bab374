//! Campus Core — domain models, repository traits, and validation.
//!
//! These are the core types shared across all crates. The storage
//! implementation lives in `campus-db`; request orchestration lives
//! in `campus-service`.

pub mod error;
pub mod id;
pub mod models;
pub mod repository;
pub mod validate;
