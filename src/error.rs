/*
 * Responsibility
 * - Errors a request can end in, and their HTTP mapping (IntoResponse)
 * - Credential failures get a fixed plain-text body (no upstream detail)
 * - Deletion failures pass the provider's error payload through as JSON
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::provider::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing Authorization header")]
    MissingAuthorization,
    // Covers rejected tokens and an unreachable provider alike.
    #[error("Invalid or missing user")]
    InvalidUser,
    #[error("user deletion rejected: {0}")]
    DeletionRejected(ProviderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingAuthorization | AppError::InvalidUser => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            AppError::DeletionRejected(err) => (StatusCode::BAD_REQUEST, Json(err)).into_response(),
        }
    }
}
