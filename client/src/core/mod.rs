//! # Core Types
//!
//! Error taxonomy and service traits shared across the client.

pub mod error;
pub mod service;

pub use self::error::{ApiError, Result};
pub use self::service::{ApiService, Navigator, NoopNavigator};
