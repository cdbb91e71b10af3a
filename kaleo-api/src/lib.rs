/// HTTP client for the service's REST API.
mod client;
/// API error type and the error-body message contract.
mod error;
/// Typed response and request models.
pub mod models;
/// Wire-format page envelopes and their normalization.
pub mod wire;

pub use client::ApiClient;
pub use error::ApiError;
