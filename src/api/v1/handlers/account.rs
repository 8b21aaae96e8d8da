/*
 * Responsibility
 * - /delete-user: delete the caller's own account at the auth provider
 * - Caller identity comes from AuthCtx (already verified by the access middleware)
 * - Provider rejection is passed through as-is (400); nothing is retried
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{dto::account::DeleteUserResponse, extractors::AuthCtxExtractor},
    error::AppError,
    state::AppState,
};

pub async fn delete_user(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<DeleteUserResponse>, AppError> {
    if let Err(err) = state.admin.delete_user(&ctx.user_id).await {
        tracing::warn!(
            user_id = %ctx.user_id,
            error = %err,
            status = err.status(),
            "user deletion rejected by auth provider"
        );
        return Err(AppError::DeletionRejected(err));
    }

    tracing::info!(
        user_id = %ctx.user_id,
        "user deleted"
    );

    Ok(Json(DeleteUserResponse { success: true }))
}
