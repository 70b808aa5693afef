//! # External Services
//!
//! Clients for everything outside this process. Currently only the API
//! gateway.

pub mod api;
