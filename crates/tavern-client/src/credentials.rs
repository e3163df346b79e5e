//! Per-request credentials.
//!
//! Credentials are a value handed to every call rather than state mutated on
//! a shared client, so two sessions can share one [`crate::ApiClient`].

use std::fmt;

use tavern_config::ApiConfig;

/// Authentication attached to a single request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    /// No `Authorization` header.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// `Authorization: Bearer <token>`. An empty token is anonymous.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: Some(token).filter(|t| !t.is_empty()),
        }
    }

    /// Credentials from the `api.token` setting.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::bearer(config.token.clone())
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.token.is_some() {
            "Bearer <redacted>"
        } else {
            "anonymous"
        };
        f.debug_tuple("Credentials").field(&shown).finish()
    }
}
