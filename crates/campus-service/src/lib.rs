//! Campus services — the validation and referential-integrity layer
//! between the HTTP surface and storage.
//!
//! Services are generic over the `campus-core` repository traits so
//! this crate has no dependency on the database crate.

pub mod group;
pub mod student;
pub mod view;
