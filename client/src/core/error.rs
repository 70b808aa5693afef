//! # Common Error Types
//!
//! Consolidated error handling for the admin client.
//!
//! Every outcome of the HTTP pipeline is normalized into [`ApiError`] so
//! that callers (the CLI, or any other front end) can present failures
//! without inspecting transport details.
//!
//! ## Error Categories
//!
//! - **SessionExpired**: the gateway rejected the bearer token (HTTP 401).
//!   By the time a caller sees this, the persisted session has already been
//!   cleared and the [`Navigator`](crate::core::service::Navigator) notified.
//! - **RequestFailed**: any other non-2xx response. Carries the server's
//!   `message` field when the error body is JSON, otherwise a generic
//!   `request failed with status <code>` message.
//! - **ConnectionUnavailable**: the request never produced an HTTP response
//!   (connection refused, DNS failure, timeout). The raw transport error is
//!   logged but never surfaced to callers.
//! - **Decode**: malformed JSON, either in a response body that declared
//!   `application/json` or in a persisted session value.

use thiserror::Error;

/// Client-wide error type covering every failure mode of the API layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The gateway answered 401: the persisted session was stale or revoked.
    ///
    /// Raised only after the session store has been cleared and the
    /// navigator notified, so callers never need to perform that cleanup.
    #[error("Session expired")]
    SessionExpired,

    /// The gateway answered with a non-2xx status other than 401.
    ///
    /// The message is the server-supplied `message` field when present,
    /// otherwise `request failed with status <code>`.
    #[error("{0}")]
    RequestFailed(String),

    /// The request never reached the gateway (connection refused, DNS
    /// failure, timeout). Deliberately carries a fixed, user-presentable
    /// message instead of the raw transport error.
    #[error("Unable to connect to the server. Please check if the backend is running.")]
    ConnectionUnavailable,

    /// Malformed JSON in a response body or a persisted session value.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
