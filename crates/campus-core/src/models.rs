//! Domain models for Campus.

pub mod group;
pub mod student;
