//! # Service Health Probes
//!
//! Best-effort, response-opaque reachability checks for the dashboard's
//! system-status panel.
//!
//! A probe reports `online` when *some* HTTP exchange completed before the
//! deadline — the status code is deliberately ignored, because the probe
//! targets include authenticated endpoints that answer 401 to an anonymous
//! probe while being perfectly healthy. `offline` means the transport
//! failed or the deadline passed. Probe failures are never propagated as
//! errors; binary reachability is the whole contract.

use futures::future::join_all;
use shared::dto::health::{ServiceHealth, ServiceStatus};

use super::client::ApiClient;

/// A named probe target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTarget {
    pub name: String,
    pub url: String,
}

impl ServiceTarget {
    pub fn new(name: &str, url: String) -> Self {
        Self {
            name: name.to_string(),
            url,
        }
    }
}

/// The dashboard's fixed probe set, relative to the gateway base URL
pub fn default_targets(base_url: &str) -> Vec<ServiceTarget> {
    vec![
        ServiceTarget::new("API Gateway", format!("{base_url}/")),
        ServiceTarget::new("Auth Service", format!("{base_url}/auth/validate")),
        ServiceTarget::new("Patient Service", format!("{base_url}/api/patients/")),
    ]
}

/// Probe a single service.
///
/// Resolves within the configured deadline (3 s by default); on timeout
/// the in-flight request is cancelled by dropping it. Never returns an
/// error.
pub async fn check_service_health(client: &ApiClient, name: &str, url: &str) -> ServiceHealth {
    let probe = client.http.get(url).send();
    let status = match tokio::time::timeout(client.probe_timeout(), probe).await {
        // Any completed exchange counts, whatever the status code
        Ok(Ok(_)) => ServiceStatus::Online,
        Ok(Err(e)) => {
            tracing::debug!(service = name, error = %e, "Health probe failed");
            ServiceStatus::Offline
        }
        Err(_) => {
            tracing::debug!(service = name, "Health probe timed out");
            ServiceStatus::Offline
        }
    };

    ServiceHealth {
        name: name.to_string(),
        status,
    }
}

/// Probe every target in parallel and wait for all of them to settle.
///
/// One probe going offline never aborts the others; the sweep returns
/// results for the full set, in target order.
pub async fn check_all(client: &ApiClient, targets: &[ServiceTarget]) -> Vec<ServiceHealth> {
    join_all(
        targets
            .iter()
            .map(|t| check_service_health(client, &t.name, &t.url)),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let targets = default_targets("http://localhost:4004");
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].name, "API Gateway");
        assert_eq!(targets[0].url, "http://localhost:4004/");
        assert_eq!(targets[1].url, "http://localhost:4004/auth/validate");
        assert_eq!(targets[2].url, "http://localhost:4004/api/patients/");
    }
}
