use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// Platform-wide counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// Number of registered users.
    pub total_users: u64,

    /// Number of registered stores.
    pub total_stores: u64,

    /// Number of ratings submitted across all stores.
    pub total_ratings: u64,
}

/// Payload for `POST /admin/add-user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddUserRequest {
    /// Full name of the account to create.
    pub name: String,

    /// Email address of the account to create.
    pub email: String,

    /// Optional postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Initial password for the account.
    pub password: String,

    /// Role granted to the account.
    pub role: UserRole,
}

/// Payload for `POST /admin/add-store`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddStoreRequest {
    /// Display name of the store.
    pub name: String,

    /// Optional contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Optional postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Id of the owner account the store is assigned to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_stats_uses_camel_case_wire_names() {
        let stats: AdminStats =
            serde_json::from_str(r#"{"totalUsers":10,"totalStores":4,"totalRatings":31}"#).unwrap();
        assert_eq!(stats.total_users, 10);
        assert_eq!(stats.total_stores, 4);
        assert_eq!(stats.total_ratings, 31);
    }

    #[test]
    fn add_user_request_serializes_role() {
        let request = AddUserRequest {
            name: "Robin Vale".to_string(),
            email: "robin@example.com".to_string(),
            address: None,
            password: "Password#1".to_string(),
            role: UserRole::Owner,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"role\":\"owner\""));
        assert!(!json.contains("address"));
    }

    #[test]
    fn add_store_request_owner_id_key() {
        let request = AddStoreRequest {
            name: "Harbor Books".to_string(),
            email: None,
            address: Some("2 Pier Road".to_string()),
            owner_id: Some(14),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"ownerId\":14"));
        assert!(!json.contains("email"));
    }
}
