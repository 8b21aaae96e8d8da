use async_trait::async_trait;
use reqwest::{Client, Response, header::AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use url::Url;

use crate::services::provider::client::{
    AccountAdmin, IdentityVerifier, ProviderError, ProviderResult,
};
use crate::services::provider::types::{AuthUser, UserId, UserResponse};

/// Supabase Auth (GoTrue) REST client authenticated with the service-role key.
///
/// - `GET  /auth/v1/user` resolves a user access token
/// - `DELETE /auth/v1/admin/users/{id}` removes the account
#[derive(Debug)]
pub struct GoTrueClient {
    http_client: Client,
    base_url: Url,
    service_role_key: Secret<String>,
}

impl GoTrueClient {
    pub fn new(base_url: Url, service_role_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            service_role_key,
        }
    }

    // Each segment is percent-encoded, so a user id can't escape its path position.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["auth", "v1"]).extend(segments);
        }
        url
    }

    async fn error_from(response: Response) -> ProviderError {
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => ProviderError::api(status, &body),
            Err(err) => ProviderError::unreadable(&err),
        }
    }
}

#[async_trait]
impl IdentityVerifier for GoTrueClient {
    #[tracing::instrument(name = "Verifying access token", skip_all)]
    async fn verify_token(&self, token: &str) -> ProviderResult<Option<AuthUser>> {
        if token.is_empty() {
            return Err(ProviderError::session_missing());
        }

        let response = self
            .http_client
            .get(self.endpoint(&["user"]))
            .header(APIKEY_HEADER, self.service_role_key.expose_secret())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ProviderError::fetch(&e))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let user = response
            .json::<Option<UserResponse>>()
            .await
            .map_err(|e| ProviderError::unreadable(&e))?;

        Ok(user.and_then(UserResponse::into_auth_user))
    }
}

#[async_trait]
impl AccountAdmin for GoTrueClient {
    #[tracing::instrument(name = "Deleting user", skip_all, fields(user_id = %user_id))]
    async fn delete_user(&self, user_id: &UserId) -> ProviderResult<()> {
        let service_role_key = self.service_role_key.expose_secret();

        let response = self
            .http_client
            .delete(self.endpoint(&["admin", "users", user_id.as_str()]))
            .header(APIKEY_HEADER, service_role_key)
            .header(AUTHORIZATION, format!("Bearer {service_role_key}"))
            .json(&DeleteUserRequest {
                should_soft_delete: false,
            })
            .send()
            .await
            .map_err(|e| ProviderError::fetch(&e))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }
}

const APIKEY_HEADER: &str = "apikey";

#[derive(Serialize, Debug)]
struct DeleteUserRequest {
    should_soft_delete: bool,
}
