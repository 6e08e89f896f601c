//! Local session persistence configuration.

use serde::{Deserialize, Serialize};

/// Where and under which keys the admin session is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON key/value file shared by every console process of this user.
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
    /// Key holding the opaque access token.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Key holding the JSON-serialized user record.
    #[serde(default = "default_user_key")]
    pub user_key: String,
    /// Route the guard redirects to.
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            token_key: default_token_key(),
            user_key: default_user_key(),
            login_path: default_login_path(),
        }
    }
}

fn default_storage_path() -> String {
    "data/session.json".to_string()
}

fn default_token_key() -> String {
    "adminToken".to_string()
}

fn default_user_key() -> String {
    "adminUser".to_string()
}

fn default_login_path() -> String {
    "/admin/login".to_string()
}
