//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the API key from the `X-API-Key` header, or the `apiKey` query parameter
//! 2. Compare it with the key generated at startup
//! 3. Reject mismatches with HTTP 401 before any handler or upstream call runs

use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Query-string fallback for clients that cannot set headers.
const API_KEY_PARAM: &str = "apiKey";

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Read `X-API-Key`; if absent or empty, read `?apiKey=`
/// 2. Compare with `AppState::api_key` by exact string equality
/// 3. If equal: call next handler
/// 4. Otherwise: return 401 Unauthorized
///
/// # Returns
///
/// - `Ok(Response)` if authenticated successfully (calls next handler)
/// - `Err(AppError::Unauthorized)` otherwise
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let candidate = presented_key(&request);

    if candidate.as_deref() != Some(state.api_key.as_ref()) {
        tracing::warn!(
            "Rejected {} {}: {}",
            request.method(),
            request.uri().path(),
            if candidate.is_some() { "wrong API key" } else { "missing API key" }
        );
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Key presented by the caller, header first.
fn presented_key(request: &Request) -> Option<String> {
    let from_header = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|key| !key.is_empty());

    if let Some(key) = from_header {
        return Some(key.to_string());
    }

    // A malformed query string just means no key was sent; first `apiKey` wins
    Query::<Vec<(String, String)>>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(pairs)| {
            pairs
                .into_iter()
                .find(|(name, _)| name == API_KEY_PARAM)
                .map(|(_, key)| key)
        })
        .filter(|key| !key.is_empty())
}
