//! Admin session entity.

use serde::{Deserialize, Serialize};

use crate::user::SessionUser;

/// The locally persisted proof of authentication.
///
/// Created from a successful login response, persisted immediately, and
/// read back on every protected navigation. There is no expiry: the token
/// is trusted until a server call rejects it or the admin logs out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// User record returned at login.
    pub user: SessionUser,
}

impl Session {
    /// Create a session.
    pub fn new(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Whether this session may open protected views.
    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }

    /// `Authorization` header value for authenticated calls.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
