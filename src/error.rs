//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation Errors**: `page`/`pageSize` that are not positive integers
/// - **Upstream Errors**: the country API is unreachable or returns garbage
/// - **Resource Errors**: a name lookup matched nothing
/// - **Authentication Errors**: missing or wrong API key
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request parameter could not be interpreted.
    ///
    /// The String is the message returned to the caller.
    #[error("{0}")]
    InvalidParameter(String),

    /// The upstream request failed at the transport level or returned an
    /// unexpected status.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream body was not a JSON array of country objects.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    /// Name lookup returned no match.
    #[error("country not found")]
    NotFound,

    /// API key is missing or does not match the process secret.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthorized")]
    Unauthorized,
}

/// Body decoding failures become `Decode`; everything else reqwest reports
/// (connect, TLS, body read) becomes `UpstreamUnavailable`.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::UpstreamUnavailable(err.to_string())
        }
    }
}

impl AppError {
    /// HTTP status for this error.
    ///
    /// Only `Unauthorized` is distinguished; every other failure collapses to
    /// 500 so callers see the same status for bad input, upstream outages
    /// and missing countries.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidParameter(_)
            | AppError::UpstreamUnavailable(_)
            | AppError::Decode(_)
            | AppError::NotFound => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "country not found" }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
