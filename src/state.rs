/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - verifier: resolves bearer tokens, admin: deletes accounts
 * - Cheap to clone (Arc inside); no per-request state lives here
 */
use std::sync::Arc;

use crate::services::provider::{AccountAdmin, IdentityVerifier};

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn IdentityVerifier>,
    pub admin: Arc<dyn AccountAdmin>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn IdentityVerifier>, admin: Arc<dyn AccountAdmin>) -> Self {
        Self { verifier, admin }
    }
}
