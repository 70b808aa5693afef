use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response.
///
/// The gateway may attach additional fields (user profile, expiry); the
/// client only relies on `token` and ignores the rest. A 2xx body without
/// a token is passed through to the caller without starting a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The user identity persisted alongside the auth token.
///
/// Derived from the email submitted at login, never from the server
/// response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
}

/// Error payload shape used by the gateway for failed requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_token_is_optional() {
        let with: LoginResponse = serde_json::from_str(r#"{"token":"T"}"#).unwrap();
        assert_eq!(with.token.as_deref(), Some("T"));

        let without: LoginResponse =
            serde_json::from_str(r#"{"message":"verification required"}"#).unwrap();
        assert!(without.token.is_none());
        assert_eq!(without.message.as_deref(), Some("verification required"));
    }
}
