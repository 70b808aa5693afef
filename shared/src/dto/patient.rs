use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient record as returned by the patient service.
///
/// Owned entirely by the backend; the client never persists these. Dates
/// travel as plain strings (`YYYY-MM-DD` for `dateOfBirth`, RFC 3339 for
/// `registeredDate`) and are not reinterpreted client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub registered_date: Option<String>,
}

impl Patient {
    /// Parse `dateOfBirth` (`YYYY-MM-DD`) as a calendar date.
    ///
    /// Returns `None` for malformed values rather than failing the whole
    /// record; the backend does not guarantee the format.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_of_birth, "%Y-%m-%d").ok()
    }
}

/// Payload for registering a new patient (`POST /api/patients/`).
///
/// Everything but the id, which the backend assigns. The registration
/// date is stamped by the client at submission time (`YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: String,
    pub registered_date: String,
}

/// Partial update payload (`PUT /api/patients/{id}`).
///
/// Fields left as `None` are omitted from the serialized body and remain
/// untouched on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_wire_names_are_camel_case() {
        let patient = Patient {
            id: "p-1".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Way".to_string(),
            date_of_birth: "1815-12-10".to_string(),
            registered_date: Some("2024-01-01T00:00:00Z".to_string()),
        };
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["dateOfBirth"], "1815-12-10");
        assert_eq!(json["registeredDate"], "2024-01-01T00:00:00Z");
        assert!(json.get("date_of_birth").is_none());
    }

    #[test]
    fn test_patient_parses_without_registered_date() {
        let raw = r#"{"id":"p-2","name":"Bob","email":"bob@example.com","address":"","dateOfBirth":"1990-05-01"}"#;
        let patient: Patient = serde_json::from_str(raw).unwrap();
        assert_eq!(patient.id, "p-2");
        assert!(patient.registered_date.is_none());
    }

    #[test]
    fn test_birth_date_parsing() {
        let raw = r#"{"id":"p-3","name":"Eve","email":"eve@example.com","address":"","dateOfBirth":"1990-05-01"}"#;
        let patient: Patient = serde_json::from_str(raw).unwrap();
        let date = patient.birth_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());

        let raw = r#"{"id":"p-4","name":"Mal","email":"mal@example.com","address":"","dateOfBirth":"not-a-date"}"#;
        let patient: Patient = serde_json::from_str(raw).unwrap();
        assert!(patient.birth_date().is_none());
    }

    #[test]
    fn test_new_patient_wire_shape() {
        let patient = NewPatient {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            address: String::new(),
            date_of_birth: "1906-12-09".to_string(),
            registered_date: "2024-06-01".to_string(),
        };
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["dateOfBirth"], "1906-12-09");
        assert_eq!(json["registeredDate"], "2024-06-01");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_update_omits_unset_fields() {
        let update = PatientUpdate {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["name"], "Renamed");
        assert!(json.get("email").is_none());
        assert!(json.get("address").is_none());
        assert!(json.get("dateOfBirth").is_none());
    }
}
