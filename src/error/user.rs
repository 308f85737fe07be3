//! Errors for user lookups.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by user point lookups.
#[derive(Error, Debug)]
pub enum UserError {
    /// No user matched the lookup key (an ID or an email address).
    #[error("User {0} not found")]
    NotFound(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref key) => {
                tracing::debug!(key = %key, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
