//! Data models.
//!
//! Upstream records and the request-derived listing criteria.

/// Country record as returned by upstream
pub mod country;
/// Listing filter/sort/page parameters
pub mod criteria;
