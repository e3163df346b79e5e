//! Campaign server connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    "tavern/0.1".to_string()
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the campaign API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request. Empty means anonymous.
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ApiConfig {
    /// Whether a token is available for authenticated requests.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Base URL with any trailing slashes removed.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject settings the HTTP client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-HTTP base URL or a
    /// zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.normalized_base_url();
        let scheme_ok = url.starts_with("http://") || url.starts_with("https://");
        let host = url.split("://").nth(1).unwrap_or_default();
        if !scheme_ok || host.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ApiConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_token());
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig {
            base_url: "https://camp.example/api//".into(),
            ..ApiConfig::default()
        };
        assert_eq!(config.normalized_base_url(), "https://camp.example/api");
    }

    #[test]
    fn rejects_bad_scheme_and_zero_timeout() {
        let bad_url = ApiConfig {
            base_url: "ftp://camp.example".into(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            bad_url.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "api.base_url"
        ));

        let no_host = ApiConfig {
            base_url: "https://".into(),
            ..ApiConfig::default()
        };
        assert!(no_host.validate().is_err());

        let zero = ApiConfig {
            timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "api.timeout_secs"
        ));
    }

    #[test]
    fn debug_redacts_token() {
        let config = ApiConfig {
            token: "secret-token".into(),
            ..ApiConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
