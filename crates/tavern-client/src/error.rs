//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the campaign API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the credentials (401/403).
    #[error("unauthorized ({status}): {message}")]
    Unauthorized {
        status: u16,
        message: String,
    },

    /// The requested resource does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// Request path that returned 404.
        path: String,
    },

    /// The server returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// API returned another non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Server-provided error message or raw response body.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),
}
