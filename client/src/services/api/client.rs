//! # API Client
//!
//! Main HTTP client for gateway communication: the single choke point for
//! all outbound requests and for the session lifecycle they drive.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use shared::dto::auth::ErrorBody;

use crate::config::ClientConfig;
use crate::core::error::{ApiError, Result};
use crate::core::service::{ApiService, Navigator, NoopNavigator};
use crate::session::SessionStore;

/// HTTP client for communicating with the API gateway.
///
/// Holds the connection pool, the client configuration, the persisted
/// session, and the navigation adapter invoked when a session ends.
pub struct ApiClient {
    pub(crate) http: Client,
    config: ClientConfig,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a client over the given configuration and session store.
    ///
    /// The underlying pool carries the configured overall timeout to
    /// prevent requests from hanging the caller.
    pub fn new(config: ClientConfig, session: SessionStore) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            config,
            session,
            navigator: Arc::new(NoopNavigator),
        }
    }

    /// Install the navigation adapter notified on session teardown
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// The persisted session this client reads and maintains
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Base URL of the gateway, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub(crate) fn probe_timeout(&self) -> Duration {
        self.config.health_probe_timeout
    }

    /// Issue a request to `base_url + path` and normalize the outcome.
    ///
    /// The pipeline, in order:
    ///
    /// 1. `Content-Type: application/json` always; `Authorization:
    ///    Bearer <token>` iff a token is persisted.
    /// 2. `body` is serialized only when `Some`; `None` suppresses the
    ///    request body entirely (an empty JSON object is still a body).
    /// 3. **401**: clear the session, notify the navigator, fail with
    ///    [`ApiError::SessionExpired`] — before any body handling.
    /// 4. **204**: success sentinel `Ok(None)`; the body is never read.
    /// 5. Otherwise the body is parsed per [`body_disposition`]: JSON only
    ///    when the response declares `application/json`, else `None`.
    /// 6. Non-2xx fails with [`ApiError::RequestFailed`], preferring the
    ///    parsed body's `message` field over the generic message.
    /// 7. A transport-level send failure becomes
    ///    [`ApiError::ConnectionUnavailable`]; a parse failure of a
    ///    declared-JSON body propagates as [`ApiError::Decode`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.config.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(method = %method, path, error = %e, "Transport failure");
            ApiError::ConnectionUnavailable
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(method = %method, path, "Authentication rejected, clearing session");
            self.session.clear();
            self.navigator.redirect_to_login();
            return Err(ApiError::SessionExpired);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let data = match body_disposition(status, content_type.as_deref()) {
            BodyDisposition::ParseJson => Some(
                response
                    .json::<Value>()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))?,
            ),
            BodyDisposition::NoBody => None,
        };

        if !status.is_success() {
            let message = data
                .as_ref()
                .and_then(|d| serde_json::from_value::<ErrorBody>(d.clone()).ok())
                .map(|body| body.message)
                .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
            tracing::warn!(method = %method, path, status = status.as_u16(), "Request failed");
            return Err(ApiError::RequestFailed(message));
        }

        Ok(data)
    }
}

// Implement ApiService for ApiClient by delegating to the endpoint modules
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<shared::dto::auth::LoginResponse> {
        crate::services::api::auth::login(self, email, password).await
    }

    fn logout(&self) {
        crate::services::api::auth::logout(self)
    }

    fn require_auth(&self) -> bool {
        crate::services::api::auth::require_auth(self)
    }

    async fn get_patients(&self) -> Result<Vec<shared::dto::patient::Patient>> {
        crate::services::api::patients::get_patients(self).await
    }

    async fn create_patient(
        &self,
        patient: &shared::dto::patient::NewPatient,
    ) -> Result<shared::dto::patient::Patient> {
        crate::services::api::patients::create_patient(self, patient).await
    }

    async fn update_patient(
        &self,
        id: &str,
        update: &shared::dto::patient::PatientUpdate,
    ) -> Result<shared::dto::patient::Patient> {
        crate::services::api::patients::update_patient(self, id, update).await
    }

    async fn delete_patient(&self, id: &str) -> Result<()> {
        crate::services::api::patients::delete_patient(self, id).await
    }

    async fn check_service_health(
        &self,
        name: &str,
        url: &str,
    ) -> shared::dto::health::ServiceHealth {
        crate::services::api::health::check_service_health(self, name, url).await
    }
}

/// How to treat the body of a response that is neither a 401 nor an
/// outright transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyDisposition {
    /// Parse the body as JSON
    ParseJson,
    /// Treat the body as absent; never read it
    NoBody,
}

/// The status × content-type decision table for response bodies.
///
/// 204 never carries a body, whatever its headers claim. Everything else
/// is parsed only when the response declares `application/json`.
pub(crate) fn body_disposition(status: StatusCode, content_type: Option<&str>) -> BodyDisposition {
    if status == StatusCode::NO_CONTENT {
        return BodyDisposition::NoBody;
    }
    match content_type {
        Some(ct) if ct.contains("application/json") => BodyDisposition::ParseJson,
        _ => BodyDisposition::NoBody,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_decision_table() {
        let json = Some("application/json");
        let json_utf8 = Some("application/json; charset=utf-8");
        let html = Some("text/html");

        assert_eq!(
            body_disposition(StatusCode::OK, json),
            BodyDisposition::ParseJson
        );
        assert_eq!(
            body_disposition(StatusCode::OK, json_utf8),
            BodyDisposition::ParseJson
        );
        assert_eq!(
            body_disposition(StatusCode::BAD_REQUEST, json),
            BodyDisposition::ParseJson
        );
        assert_eq!(
            body_disposition(StatusCode::OK, html),
            BodyDisposition::NoBody
        );
        assert_eq!(
            body_disposition(StatusCode::OK, None),
            BodyDisposition::NoBody
        );
        // 204 wins over any declared content type
        assert_eq!(
            body_disposition(StatusCode::NO_CONTENT, json),
            BodyDisposition::NoBody
        );
        assert_eq!(
            body_disposition(StatusCode::INTERNAL_SERVER_ERROR, html),
            BodyDisposition::NoBody
        );
    }
}
