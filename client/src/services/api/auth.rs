//! # Authentication Endpoints
//!
//! Login, logout, and the auth guard used by protected front-end flows.

use reqwest::Method;
use shared::dto::auth::{LoginRequest, LoginResponse, SessionUser};

use super::client::ApiClient;
use crate::core::error::{ApiError, Result};

/// Login with email and password.
///
/// When the response carries a token, persists it together with a
/// [`SessionUser`] derived from the *submitted* email — the server's
/// response body is never consulted for the identity. A 2xx response
/// without a token is returned to the caller with nothing persisted.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let payload = serde_json::to_value(&request).map_err(|e| ApiError::Decode(e.to_string()))?;

    let data = client
        .request(Method::POST, "/auth/login", Some(&payload))
        .await?;

    let response: LoginResponse = match data {
        Some(value) => {
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?
        }
        None => {
            return Err(ApiError::Decode(
                "login response carried no JSON body".to_string(),
            ))
        }
    };

    match &response.token {
        Some(token) => {
            client.session().set_token(token);
            client.session().set_user(&SessionUser {
                email: email.to_string(),
            });
            tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
        }
        None => {
            tracing::warn!("Login response carried no token; session not persisted");
        }
    }
    Ok(response)
}

/// Clear the persisted session and send the user to the login entry point.
///
/// Purely local: the gateway holds no session state to revoke.
pub fn logout(client: &ApiClient) {
    tracing::info!("Logging out");
    client.session().clear();
    client.navigator().redirect_to_login();
}

/// Guard for protected flows; must run before any other page initialization.
///
/// Returns true when a session exists. Otherwise notifies the navigator
/// and returns false.
pub fn require_auth(client: &ApiClient) -> bool {
    if client.session().is_authenticated() {
        true
    } else {
        client.navigator().redirect_to_login();
        false
    }
}
