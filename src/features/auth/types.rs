//! Request and response types for the auth API calls, plus the in-memory
//! session record. Payloads carry credentials and reset tokens, so they must
//! never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User fields the session core depends on. The identity endpoint returns the
/// resource unwrapped, so this deserializes the top-level object directly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    /// One-time reset token from the recovery email, distinct from the
    /// bearer session token.
    pub token: String,
}

/// Generic `{ "message": ... }` payload returned by the notification and
/// password endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// The authenticated identity held in memory and mirrored to storage.
/// Replaced wholesale on every login, never mutated field by field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{LoginResponse, SessionRecord};

    #[test]
    fn login_response_with_unverified_email_decodes() {
        let payload = r#"{"token":"abc","user":{"id":7,"email_verified_at":null}}"#;
        let response: LoginResponse =
            serde_json::from_str(payload).expect("login response should decode");

        assert_eq!(response.token, "abc");
        assert_eq!(response.user.id, 7);
        assert!(response.user.email_verified_at.is_none());
        assert!(response.message.is_none());
    }

    #[test]
    fn login_response_with_verified_email_decodes() {
        let payload = r#"{
            "token":"abc",
            "user":{"id":7,"email":"a@b.c","email_verified_at":"2025-01-01T00:00:00Z"},
            "message":"Welcome back"
        }"#;
        let response: LoginResponse =
            serde_json::from_str(payload).expect("login response should decode");

        assert_eq!(
            response.user.email_verified_at.as_deref(),
            Some("2025-01-01T00:00:00Z")
        );
        assert_eq!(response.message.as_deref(), Some("Welcome back"));
    }

    #[test]
    fn session_record_round_trips_through_json() {
        let record = SessionRecord {
            token: "opaque-token".to_string(),
            user_id: 42,
            message: None,
        };

        let raw = serde_json::to_string(&record).expect("record should encode");
        assert!(raw.contains("\"userId\":42"));

        let decoded: SessionRecord = serde_json::from_str(&raw).expect("record should decode");
        assert_eq!(decoded, record);
    }
}
