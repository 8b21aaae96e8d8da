/*
 * Responsibility
 * - Response DTO of the delete-user endpoint
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub success: bool,
}
