/*
 * Responsibility
 * - Pull the bearer token out of the Authorization header
 * - Local check is presence only; the token's validity is the provider's call
 */
use axum::http::{HeaderMap, header};

use crate::error::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// Returns the token carried by `Authorization`.
///
/// - header absent or empty: `MissingAuthorization`
/// - header present but not visible ASCII: `InvalidUser` (no provider can accept it)
/// - `Bearer <token>`: `<token>`
/// - anything else is passed on verbatim (the provider will reject it)
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingAuthorization)?
        .to_str()
        .map_err(|_| AppError::InvalidUser)?;

    Ok(value.strip_prefix(BEARER_PREFIX).unwrap_or(value))
}
