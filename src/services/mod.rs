//! Business logic services.
//!
//! Services contain the upstream client and the listing/lookup logic,
//! separated from HTTP handlers.

pub mod countries;
pub mod upstream;
