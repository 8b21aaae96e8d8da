use std::fmt;

use serde::Deserialize;

/// Provider-side user id. Opaque: only ever handed back to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: UserId,
}

/// `GET /auth/v1/user` body. Only the id is read; profile data is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    #[serde(default)]
    pub id: Option<String>,
}

impl UserResponse {
    /// A body without a usable id means "no user".
    pub(crate) fn into_auth_user(self) -> Option<AuthUser> {
        let id = self.id.filter(|id| !id.is_empty())?;
        Some(AuthUser {
            id: UserId::new(id),
        })
    }
}
