//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can short-circuit requests (reject unauthorized) before any
//! upstream call is made.

/// API key authentication middleware
pub mod auth;
