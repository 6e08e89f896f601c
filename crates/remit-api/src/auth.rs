//! Login endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use remit_core::error::AppError;

use crate::client::ApiClient;

/// Body of the login request.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Email address or phone number.
    pub credential: String,
    /// Plain password, sent over the configured transport.
    pub password: String,
}

impl LoginRequest {
    /// Create a login request.
    pub fn new(credential: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            password: password.into(),
        }
    }
}

/// Successful login response.
///
/// `role` stays a raw string here: deciding what a role means is the
/// session layer's job, and an unexpected role must still be reported as
/// an authorization failure rather than a decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for authenticated calls.
    pub access_token: String,
    /// Role of the authenticated user.
    pub role: String,
    /// Remaining fields (profile data, token type, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginResponse {
    /// The full response as a JSON object, as persisted for the session user.
    pub fn to_user_record(&self) -> Value {
        let mut record = self.extra.clone();
        record.insert("access_token".into(), Value::String(self.access_token.clone()));
        record.insert("role".into(), Value::String(self.role.clone()));
        Value::Object(record)
    }
}

impl ApiClient {
    /// `POST` the credentials to the login endpoint.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let url = self.login_url();
        tracing::debug!("Logging in as '{}' via {}", request.credential, url);

        let body = self.execute(self.post_json(&url, request)).await?;
        serde_json::from_value(body).map_err(|e| {
            AppError::with_source(
                remit_core::ErrorKind::Serialization,
                format!("Unexpected login response: {e}"),
                e,
            )
        })
    }
}
