//! # Gateway API Client Module
//!
//! HTTP client for communicating with the patient management API gateway.
//! Handles authentication, patient CRUD, and service health probes.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and the request pipeline
//! ├── auth.rs     - Authentication (login, logout, auth guard)
//! ├── patients.rs - Patient CRUD endpoints
//! └── health.rs   - Bounded-timeout reachability probes
//! ```

pub mod auth;
pub mod client;
pub mod health;
pub mod patients;

pub use client::ApiClient;
pub use health::{default_targets, ServiceTarget};
