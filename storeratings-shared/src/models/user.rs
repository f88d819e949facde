use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role assigned to a user account, controlling which screens it may reach.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
    Owner,
}

impl UserRole {
    /// Every role, in the order selection controls present them.
    pub const ALL: [Self; 3] = [Self::User, Self::Admin, Self::Owner];

    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            _ => Err("unknown user role"),
        }
    }
}

/// A user account as reported by the API.
///
/// The same shape serves the session profile returned by login/signup and the
/// rows of the admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's full name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// Postal address; the server may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Role granted to the account.
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [
            ("user", UserRole::User),
            ("admin", UserRole::Admin),
            ("owner", UserRole::Owner),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("moderator").is_err());
        assert!(UserRole::from_str("").is_err());
        assert!(UserRole::from_str("Admin").is_err());
    }

    #[test]
    fn user_role_serializes_lowercase() {
        let json = serde_json::to_string(&UserRole::Owner).unwrap();
        assert_eq!(json, "\"owner\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn user_deserializes_without_address() {
        let json = r#"{"id":7,"name":"Jordan Miles","email":"jordan@example.com","role":"user"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.address, None);
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn user_serialization_roundtrip() {
        let user = User {
            id: 12,
            name: "Avery Stone".to_string(),
            email: "avery@example.com".to_string(),
            address: Some("12 Canal Street".to_string()),
            role: UserRole::Owner,
        };

        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, user);
    }
}
