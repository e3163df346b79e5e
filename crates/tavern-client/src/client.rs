//! The campaign API client.

use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tavern_config::ApiConfig;

use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::http::{check_response, decode_json};

/// HTTP client for the campaign server.
///
/// Holds no authentication state: every call takes the [`Credentials`] to
/// send, so one client can serve several sessions.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `api` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to
    /// build (e.g. the TLS backend cannot initialize).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub(crate) fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// [`Self::url`] plus an encoded query string.
    pub(crate) fn url_with_query(&self, segments: &[&str], query: &[(&str, String)]) -> String {
        let mut url = self.url(segments);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        credentials: &Credentials,
        url: String,
        configure: impl FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(%method, %url, authenticated = credentials.is_authenticated(), "api request");
        let request = configure(credentials.apply(self.http.request(method, &url)));
        check_response(request.send().await?).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url_with_query(segments, query);
        let resp = self.send(Method::GET, credentials, url, |req| req).await?;
        decode_json(resp).await
    }

    pub(crate) async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .send(Method::POST, credentials, self.url(segments), |req| req.json(body))
            .await?;
        decode_json(resp).await
    }

    pub(crate) async fn patch_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .send(Method::PATCH, credentials, self.url(segments), |req| req.json(body))
            .await?;
        decode_json(resp).await
    }

    /// POST whose response body is ignored.
    pub(crate) async fn post_unit<B: Serialize + Sync>(
        &self,
        credentials: &Credentials,
        segments: &[&str],
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(Method::POST, credentials, self.url(segments), |req| req.json(body))
            .await?;
        Ok(())
    }

    pub(crate) async fn delete(
        &self,
        credentials: &Credentials,
        segments: &[&str],
    ) -> Result<(), ApiError> {
        self.send(Method::DELETE, credentials, self.url(segments), |req| req)
            .await?;
        Ok(())
    }
}
