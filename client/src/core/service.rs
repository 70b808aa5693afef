//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity.
//!
//! [`ApiService`] abstracts the gateway operations so front ends can be
//! tested against a mock implementation. [`Navigator`] isolates the one
//! navigation side effect the API layer triggers (sending the user back to
//! the login entry point) so the request pipeline itself stays pure.

use async_trait::async_trait;
use shared::dto::auth::LoginResponse;
use shared::dto::health::ServiceHealth;
use shared::dto::patient::{NewPatient, Patient, PatientUpdate};

use crate::core::error::Result;

/// Trait for API service operations.
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login with email and password, persisting the session on success
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;

    /// Clear the persisted session and send the user to the login entry point
    fn logout(&self);

    /// Auth guard: false (after notifying the navigator) when no session exists
    fn require_auth(&self) -> bool;

    /// Fetch all patient records
    async fn get_patients(&self) -> Result<Vec<Patient>>;

    /// Register a new patient
    async fn create_patient(&self, patient: &NewPatient) -> Result<Patient>;

    /// Apply a partial update to an existing patient
    async fn update_patient(&self, id: &str, update: &PatientUpdate) -> Result<Patient>;

    /// Delete a patient record
    async fn delete_patient(&self, id: &str) -> Result<()>;

    /// Best-effort reachability probe; never fails, resolves within the
    /// configured probe deadline
    async fn check_service_health(&self, name: &str, url: &str) -> ServiceHealth;
}

/// Adapter for the login-redirect side effect.
///
/// The API layer invokes this on 401 responses, on `logout`, and when
/// `require_auth` fails. A GUI would navigate to its login screen here; the
/// CLI prints sign-in instructions; tests record the call.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Default navigator that does nothing. Used when no front end is attached.
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_login(&self) {}
}
