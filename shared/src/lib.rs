//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the admin client and the
//! patient management API gateway. All DTOs use JSON serialization via
//! `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and session DTOs
//!   - **[`dto::patient`]**: Patient record DTOs (read, create, partial update)
//!   - **[`dto::health`]**: Service health probe results
//!
//! ## Wire Format
//!
//! The gateway exposes a JavaScript-style JSON contract:
//! - Patient field names are **camelCase** on the wire (`dateOfBirth`,
//!   `registeredDate`), mapped via `#[serde(rename_all = "camelCase")]`
//! - Optional fields are omitted when `None` (using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Unknown fields in responses are ignored on deserialization
//!
//! ## Usage in the client
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     email: "admin@clinic.example".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_value(&request).unwrap();
//! assert_eq!(body["email"], "admin@clinic.example");
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
