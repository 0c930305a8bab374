//! Request extraction helpers.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejection maps to the wire error shape
/// with status 400 instead of axum's default.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);
