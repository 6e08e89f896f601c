//! The user record persisted alongside the session token.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::role::UserRole;

/// The user record returned by the login endpoint.
///
/// Only `role` is interpreted; every other field of the login response is
/// kept verbatim in `profile` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Role granted by the back office.
    pub role: UserRole,
    /// Remaining profile fields (name, email, phone, ...).
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl SessionUser {
    /// Create a user record with an empty profile.
    pub fn new(role: UserRole) -> Self {
        Self {
            role,
            profile: Map::new(),
        }
    }

    /// Best-effort display name taken from the profile.
    pub fn display_name(&self) -> Option<&str> {
        ["full_name", "name", "email", "phone", "credential"]
            .iter()
            .find_map(|key| self.profile.get(*key).and_then(Value::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_fields_survive_roundtrip() {
        let raw = r#"{"role":"admin","email":"ops@remit.test","id":7}"#;
        let user: SessionUser = serde_json::from_str(raw).unwrap();

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.display_name(), Some("ops@remit.test"));

        let back: Value = serde_json::to_value(&user).unwrap();
        assert_eq!(back["id"], 7);
        assert_eq!(back["role"], "admin");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let raw = r#"{"role":"superuser"}"#;
        assert!(serde_json::from_str::<SessionUser>(raw).is_err());
    }
}
