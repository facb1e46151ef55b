//! HTTP handlers for the Lukulasi API.

/// Content library endpoints.
pub mod content;
/// PDF upload endpoint.
pub mod upload;
