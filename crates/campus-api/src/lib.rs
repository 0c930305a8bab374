//! HTTP surface over the group and student services.
//!
//! Handlers do nothing beyond extraction, one service call, and
//! response shaping; every validation chain lives in
//! `campus-service`.

mod dto;
mod error;
mod extract;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
