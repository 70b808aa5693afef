//! # Patient Endpoints
//!
//! CRUD operations against the patient service, via the gateway.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::dto::patient::{NewPatient, Patient, PatientUpdate};

use super::client::ApiClient;
use crate::core::error::{ApiError, Result};

/// Fetch all patient records.
pub async fn get_patients(client: &ApiClient) -> Result<Vec<Patient>> {
    let data = client.request(Method::GET, "/api/patients/", None).await?;
    decode(data)
}

/// Register a new patient; the backend assigns the id.
#[tracing::instrument(skip(client, patient), fields(name = %patient.name))]
pub async fn create_patient(client: &ApiClient, patient: &NewPatient) -> Result<Patient> {
    let payload = serde_json::to_value(patient).map_err(|e| ApiError::Decode(e.to_string()))?;
    let data = client
        .request(Method::POST, "/api/patients/", Some(&payload))
        .await?;
    decode(data)
}

/// Apply a partial update; `None` fields are left untouched on the server.
#[tracing::instrument(skip(client, update))]
pub async fn update_patient(
    client: &ApiClient,
    id: &str,
    update: &PatientUpdate,
) -> Result<Patient> {
    let payload = serde_json::to_value(update).map_err(|e| ApiError::Decode(e.to_string()))?;
    let data = client
        .request(Method::PUT, &format!("/api/patients/{id}"), Some(&payload))
        .await?;
    decode(data)
}

/// Delete a patient record. The gateway answers 204, which resolves here
/// without the body ever being read.
#[tracing::instrument(skip(client))]
pub async fn delete_patient(client: &ApiClient, id: &str) -> Result<()> {
    client
        .request(Method::DELETE, &format!("/api/patients/{id}"), None)
        .await?;
    Ok(())
}

/// Decode a response that the contract requires to carry a JSON body
fn decode<T: DeserializeOwned>(data: Option<Value>) -> Result<T> {
    let value = data.ok_or_else(|| ApiError::Decode("expected a JSON response body".to_string()))?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
