//! Interfaces to the hosted auth provider, used by the auth middleware and the
//! delete-user handler.
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::services::provider::types::{AuthUser, UserId};

/// Result type for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error reported by the provider (or by the transport to it).
///
/// The payload is kept opaque: it is what callers see verbatim when a deletion
/// is rejected, so it is never reshaped into a local error type. Payloads built
/// here carry the keys the provider's JS SDK serializes for its `AuthError`s
/// (`__isAuthError`, `name`, `status`, `code`); the human readable message is not
/// one of them and stays local for logging.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(transparent)]
#[error("{}", summary(.payload, .message.as_deref()))]
pub struct ProviderError {
    payload: Map<String, Value>,
    #[serde(skip)]
    message: Option<String>,
}

impl ProviderError {
    pub fn from_payload(payload: Map<String, Value>) -> Self {
        Self {
            payload,
            message: None,
        }
    }

    /// Non-2xx response from the provider API.
    ///
    /// GoTrue bodies look like `{"code":404,"error_code":"user_not_found","msg":"User not found"}`
    /// (older versions use `message` / `error_description`).
    pub fn api(status: u16, body: &str) -> Self {
        // gateway failures are reported as retryable, whatever the body says
        if matches!(status, 502..=504) {
            return Self::build("AuthRetryableFetchError", Some(status), None)
                .with_message(format!("upstream unavailable ({status})"));
        }

        let parsed = serde_json::from_str::<Value>(body).ok();
        let Some(Value::Object(upstream)) = parsed else {
            let message = if body.trim().is_empty() {
                format!("unexpected response status {status}")
            } else {
                body.to_string()
            };
            return Self::unknown(message);
        };

        let message = ["msg", "message", "error_description", "error"]
            .iter()
            .find_map(|key| upstream.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| format!("unexpected response status {status}"));

        let code = ["error_code", "code"]
            .iter()
            .find_map(|key| upstream.get(*key).and_then(Value::as_str))
            .map(str::to_string);

        Self::build("AuthApiError", Some(status), code).with_message(message)
    }

    /// The request never produced a response (DNS, connect, TLS, reset...).
    pub fn fetch(err: &reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16()).unwrap_or(0);
        Self::build("AuthRetryableFetchError", Some(status), None).with_message(err.to_string())
    }

    /// Response whose body could not be read or decoded.
    pub fn unreadable(err: &reqwest::Error) -> Self {
        Self::unknown(err.to_string())
    }

    /// No token to resolve a user from.
    pub fn session_missing() -> Self {
        Self::build("AuthSessionMissingError", Some(400), None)
            .with_message("Auth session missing!".to_string())
    }

    pub fn status(&self) -> Option<u64> {
        self.payload.get("status").and_then(Value::as_u64)
    }

    // The SDK keeps the decoding error as `originalError`, which serializes to `{}`.
    fn unknown(message: String) -> Self {
        let mut err = Self::build("AuthUnknownError", None, None).with_message(message);
        err.payload
            .insert("originalError".into(), Value::Object(Map::new()));
        err
    }

    fn build(name: &str, status: Option<u16>, code: Option<String>) -> Self {
        let mut payload = Map::new();
        payload.insert("__isAuthError".into(), Value::Bool(true));
        payload.insert("name".into(), Value::from(name));
        if let Some(status) = status {
            payload.insert("status".into(), Value::from(status));
        }
        if let Some(code) = code {
            payload.insert("code".into(), Value::from(code));
        }
        Self::from_payload(payload)
    }

    fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }
}

fn summary(payload: &Map<String, Value>, message: Option<&str>) -> String {
    let name = payload.get("name").and_then(Value::as_str);
    match (name, message) {
        (Some(name), Some(message)) => format!("{name}: {message}"),
        (Some(name), None) => name.to_string(),
        (None, Some(message)) => message.to_string(),
        (None, None) => "auth provider error".to_string(),
    }
}

/// Resolves a bearer token to the user it was issued for.
#[async_trait]
pub trait IdentityVerifier: Send + Sync + 'static {
    // Returns:
    // - `Ok(Some(user))` if the provider accepted the token
    // - `Ok(None)` if it answered without a user
    // - `Err(_)` for rejection and transport failures alike
    async fn verify_token(&self, token: &str) -> ProviderResult<Option<AuthUser>>;
}

/// Administrative account operations (service-role privileges).
#[async_trait]
pub trait AccountAdmin: Send + Sync + 'static {
    /// Hard-deletes the account. Irreversible.
    async fn delete_user(&self, user_id: &UserId) -> ProviderResult<()>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn api_error_serializes_like_the_sdk() {
        let err = ProviderError::api(
            404,
            r#"{"code":404,"error_code":"user_not_found","msg":"User not found"}"#,
        );

        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"__isAuthError":true,"name":"AuthApiError","status":404,"code":"user_not_found"}"#
        );
        assert_eq!(err.status(), Some(404));
        // message is only used locally
        assert_eq!(err.to_string(), "AuthApiError: User not found");
    }

    #[test]
    fn api_error_falls_back_for_legacy_and_plain_bodies() {
        let legacy = ProviderError::api(
            401,
            r#"{"error":"invalid_grant","error_description":"Token expired"}"#,
        );
        assert_eq!(
            serde_json::to_string(&legacy).unwrap(),
            r#"{"__isAuthError":true,"name":"AuthApiError","status":401}"#
        );
        assert_eq!(legacy.to_string(), "AuthApiError: Token expired");

        let plain = ProviderError::api(500, "Internal Server Error");
        assert_eq!(
            serde_json::to_string(&plain).unwrap(),
            r#"{"__isAuthError":true,"name":"AuthUnknownError","originalError":{}}"#
        );
        assert_eq!(plain.status(), None);
    }

    #[test]
    fn gateway_errors_are_retryable() {
        let err = ProviderError::api(503, "Service Unavailable");

        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"__isAuthError": true, "name": "AuthRetryableFetchError", "status": 503})
        );
    }

    #[test]
    fn session_missing_payload() {
        assert_eq!(
            serde_json::to_string(&ProviderError::session_missing()).unwrap(),
            r#"{"__isAuthError":true,"name":"AuthSessionMissingError","status":400}"#
        );
    }

    #[test]
    fn payload_serializes_verbatim() {
        let mut payload = Map::new();
        payload.insert("nested".into(), json!({"k": null}));
        payload.insert("anything".into(), json!([1, 2, 3]));

        let err = ProviderError::from_payload(payload);

        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"nested":{"k":null},"anything":[1,2,3]}"#
        );
        assert_eq!(err.to_string(), "auth provider error");
    }
}
