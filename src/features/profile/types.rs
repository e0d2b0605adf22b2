use serde::{Deserialize, Serialize};

/// Display fields of the identity record. The identity endpoint returns the
/// resource unwrapped.
#[derive(Clone, Debug, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email_verified_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Update payload. The password is optional; omitting it keeps the current
/// one.
#[derive(Clone, Debug, Serialize)]
pub struct UpdateProfilePayload {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::UpdateProfilePayload;

    #[test]
    fn update_payload_omits_absent_fields() {
        let payload = UpdateProfilePayload {
            full_name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            password: None,
            avatar: None,
        };

        let raw = serde_json::to_string(&payload).expect("payload should encode");
        assert!(!raw.contains("password"));
        assert!(!raw.contains("avatar"));
    }
}
