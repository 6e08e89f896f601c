//! REST API client configuration.

use serde::{Deserialize, Serialize};

/// Back-office REST API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Login endpoint, relative to `base_url`.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_login_path() -> String {
    "/users/login".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
