//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (401/403, 404, 429 with `Retry-After`
//! parsing, other non-success → [`ApiError::Api`]) so endpoint modules stay
//! focused on request construction and response mapping.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for error statuses. Returns the response unchanged
/// on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == 429 {
        return Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == 404 {
        return Err(ApiError::NotFound {
            path: resp.url().path().to_string(),
        });
    }

    let code = status.as_u16();
    let message = error_message(&resp.text().await.unwrap_or_default());
    if code == 401 || code == 403 {
        return Err(ApiError::Unauthorized {
            status: code,
            message,
        });
    }
    Err(ApiError::Api {
        status: code,
        message,
    })
}

/// Decode a checked response body as JSON.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Pull a human message out of an error body. The server answers with
/// `{"detail": …}`, `{"message": …}`, or `{"error": …}` depending on the
/// layer that failed; anything else is returned raw.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    parsed
        .as_ref()
        .and_then(|value| {
            ["detail", "message", "error"]
                .iter()
                .find_map(|key| value.get(key))
        })
        .map(|field| match field {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "not-a-number");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let err = check_response(mock_response(429, "")).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let err = check_response(mock_response(404, "")).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn check_response_unauthorized_uses_detail() {
        let err = check_response(mock_response(401, r#"{"detail":"token expired"}"#))
            .await
            .unwrap_err();
        match err {
            ApiError::Unauthorized { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "token expired");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn check_response_api_error_with_raw_body() {
        let err = check_response(mock_response(500, "upstream exploded\n"))
            .await
            .unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }

    #[tokio::test]
    async fn decode_json_reports_parse_errors() {
        let err = decode_json::<Vec<u32>>(mock_response(200, "{not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));

        let ok: Vec<u32> = decode_json(mock_response(200, "[1,2]")).await.unwrap();
        assert_eq!(ok, vec![1, 2]);
    }

    #[test]
    fn error_message_prefers_known_fields() {
        assert_eq!(error_message(r#"{"message":"bad name"}"#), "bad name");
        assert_eq!(
            error_message(r#"{"detail":[{"loc":["name"]}]}"#),
            r#"[{"loc":["name"]}]"#
        );
        assert_eq!(error_message("plain"), "plain");
    }
}
