/*
 * Responsibility
 * - Type of the "verified caller" context seen by handlers
 * - Inserted into request extensions by the access middleware only
 */

use crate::services::provider::UserId;

/// Context attached to a request whose bearer token the provider accepted.
///
/// `user_id` is the provider's id, passed back to it unchanged.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: UserId,
}

impl AuthCtx {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
