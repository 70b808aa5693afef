use serde::{Deserialize, Serialize};
use std::fmt;

/// Reachability of a backend service as seen by a probe.
///
/// `Online` only proves that some HTTP exchange completed before the probe
/// deadline; the probe never inspects the status code, so a reachable but
/// unhealthy service still reports online.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Online,
    Offline,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Online => write!(f, "online"),
            ServiceStatus::Offline => write!(f, "offline"),
        }
    }
}

/// Result of a single health probe. Ephemeral, recomputed on each sweep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceHealth {
    pub name: String,
    pub status: ServiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceStatus::Online).unwrap(),
            "\"online\""
        );
        assert_eq!(
            serde_json::to_string(&ServiceStatus::Offline).unwrap(),
            "\"offline\""
        );
    }

    #[test]
    fn test_health_round_trip() {
        let health = ServiceHealth {
            name: "API Gateway".to_string(),
            status: ServiceStatus::Offline,
        };
        let json = serde_json::to_string(&health).unwrap();
        let back: ServiceHealth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, health);
    }
}
