/*
 * Responsibility
 * - URL layout of v1 (mounted under /functions/v1)
 * - /health is public; /delete-user sits behind access-token verification
 * - /delete-user accepts any method
 */
use axum::{
    Router,
    routing::{any, get},
};

use crate::api::v1::handlers::{account::delete_user, health::health};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new().route("/delete-user", any(delete_user));
    let protected = middleware::auth::access::apply(protected, state);

    Router::new()
        .route("/health", get(health))
        .merge(protected)
}
