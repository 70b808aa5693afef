//! # Patient Management Admin Client - Library Root
//!
//! Client library for the patient management API gateway. This crate
//! contains the session store, the HTTP API layer, and the error taxonomy
//! used by the `pmadmin` binary (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                client (this crate)                   │
//! ├──────────────────────────────────────────────────────┤
//! │  reqwest     - HTTP client                           │
//! │  tokio       - Async runtime                         │
//! │  shared      - Wire contract DTOs                    │
//! │  tracing     - Structured logging                    │
//! └──────────────────────────────────────────────────────┘
//!                          │ HTTP
//!                          ▼
//! ┌──────────────────────────────────────────────────────┐
//! │   API Gateway  →  Auth Service / Patient Service     │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: Error taxonomy ([`ApiError`]) and the [`ApiService`] /
//!   [`Navigator`] traits used for dependency injection
//! - **session**: Persisted session state (token + user) over an
//!   injectable [`session::StorageBackend`]
//! - **services**: The HTTP API layer
//!   - `api::client`: [`ApiClient`] and the request pipeline
//!   - `api::auth`: login / logout / auth guard
//!   - `api::patients`: patient CRUD
//!   - `api::health`: bounded-timeout reachability probes
//! - **config**: Environment-driven client configuration
//!
//! ## Session & Error Contract
//!
//! All HTTP traffic funnels through [`ApiClient::request`], which attaches
//! the bearer token when a session exists and normalizes every outcome into
//! [`ApiError`]:
//!
//! - HTTP 401 clears the persisted session, notifies the [`Navigator`], and
//!   yields [`ApiError::SessionExpired`]
//! - HTTP 204 is the success sentinel (no body is read)
//! - other non-2xx yields [`ApiError::RequestFailed`] with the server's
//!   `message` when one is present
//! - transport failures yield [`ApiError::ConnectionUnavailable`], never the
//!   raw transport error text
//!
//! The library performs no navigation itself; the [`Navigator`] adapter
//! installed by the caller owns that side effect.

pub mod config;
pub mod core;
pub mod services;
pub mod session;

// Re-export commonly used types for convenience
// These are the most frequently used types that consumers of this library will need
pub use crate::config::ClientConfig;
pub use crate::core::error::{ApiError, Result};
pub use crate::core::service::{ApiService, Navigator};
pub use crate::services::api::ApiClient;
pub use crate::session::SessionStore;

// Re-exported so binary and test code can name HTTP methods without taking
// a direct reqwest dependency
pub use reqwest::Method;
