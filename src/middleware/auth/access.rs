//! access token verification -> AuthCtx into request extensions
//!
//! The token is resolved by the auth provider (`IdentityVerifier`); nothing about
//! it is checked locally beyond presence. Handlers behind this layer only ever run
//! with a verified user, so account operations can't happen for an unknown caller.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::middleware::bearer_auth::bearer_token;
use crate::state::AppState;

/// Applies access-token verification to every route of `router`.
///
/// ```ignore
/// let protected = Router::new().route("/delete-user", any(delete_user));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // route_layer: unknown paths stay 404 instead of turning into 401
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = match bearer_token(req.headers()) {
        Ok(token) => token.to_owned(),
        Err(err) => {
            tracing::info!(error = %err, "authorization header rejected");
            return Err(err);
        }
    };

    let user = match state.verifier.verify_token(&token).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!("access token resolved to no user");
            return Err(AppError::InvalidUser);
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                status = err.status(),
                "access token verification failed"
            );
            return Err(AppError::InvalidUser);
        }
    };

    let auth_ctx = AuthCtx::new(user.id);

    // middleware -> extractor
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}
