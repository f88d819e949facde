use serde::{Deserialize, Serialize};

use super::user::User;

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Payload for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// Full name of the new account.
    pub name: String,

    /// Email address of the new account.
    pub email: String,

    /// Optional postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Password for the new account.
    pub password: String,
}

/// Token and profile returned by both login and signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,

    /// Profile of the authenticated user.
    pub user: User,
}

/// Payload for `POST /auth/update-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    /// The password currently on the account.
    pub old_password: String,

    /// The replacement password.
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn signup_request_omits_empty_address() {
        let request = SignupRequest {
            name: "Dana Reeve".to_string(),
            email: "dana@example.com".to_string(),
            address: None,
            password: "Password#1".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("address"));
    }

    #[test]
    fn update_password_uses_camel_case_keys() {
        let request = UpdatePasswordRequest {
            old_password: "Old#Secret1".to_string(),
            new_password: "New#Secret2".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"oldPassword\""));
        assert!(json.contains("\"newPassword\""));
    }

    #[test]
    fn auth_response_roundtrip() {
        let json = r#"{
            "token": "abc.def.ghi",
            "user": {"id":3,"name":"Sam Ortiz","email":"sam@example.com","role":"admin"}
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "abc.def.ghi");
        assert_eq!(response.user.role, UserRole::Admin);
    }
}
