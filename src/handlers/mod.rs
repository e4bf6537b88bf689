//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (URL params, query string)
//! 2. Calls the country services
//! 3. Returns HTTP response (JSON, status code)

/// Country lookup and listing endpoints
pub mod countries;
/// Liveness probe
pub mod health;
