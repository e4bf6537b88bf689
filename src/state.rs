//! Shared application state handed to every handler and middleware.

use crate::services::upstream::UpstreamClient;
use std::sync::Arc;
use uuid::Uuid;

/// Process-wide state.
///
/// Built once in `main` and never mutated afterwards, so clones can be read
/// from any number of concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the upstream country API
    pub upstream: UpstreamClient,

    /// The single API key every request must present
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(upstream: UpstreamClient, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            upstream,
            api_key: api_key.into(),
        }
    }
}

/// Generate a fresh random API key (UUIDv4, hyphenated).
pub fn generate_api_key() -> String {
    Uuid::new_v4().to_string()
}
