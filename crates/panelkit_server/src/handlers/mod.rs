//! HTTP request handlers.

/// Page fragment and health endpoints.
pub mod page;
