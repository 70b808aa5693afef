//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the admin client and the API gateway.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login request/response and session user DTOs
//! - [`patient`] - Patient records and their create/update shapes
//! - [`health`] - Service health probe results
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "admin@clinic.example",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "message": "Login successful"
//! }
//! ```

pub mod auth;
pub mod health;
pub mod patient;

pub use auth::*;
pub use health::*;
pub use patient::*;
