//! Thin wrapper over `reqwest` bound to the configured base URL.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use remit_core::config::ApiConfig;
use remit_core::error::AppError;
use remit_entity::session::Session;

use crate::error;

/// HTTP client for the back-office API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
    /// Login endpoint relative to `base_url`.
    login_path: String,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            login_path: config.login_path.clone(),
        })
    }

    /// Absolute URL for a path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Login endpoint URL.
    pub(crate) fn login_url(&self) -> String {
        self.url(&self.login_path)
    }

    /// Start a request, attaching the bearer token when a session is given.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
    ) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match session {
            Some(session) => builder.bearer_auth(&session.token),
            None => builder,
        }
    }

    /// Start a `POST` to an absolute URL with a JSON body.
    pub(crate) fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> RequestBuilder {
        self.http.post(url).json(body)
    }

    /// Send a request and decode the JSON body.
    ///
    /// Empty success bodies (typical for `DELETE`) decode to `Value::Null`.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Value, AppError> {
        let response = request.send().await.map_err(error::from_reqwest)?;
        let status = response.status();
        let body = response.text().await.map_err(error::from_reqwest)?;

        if !status.is_success() {
            tracing::debug!("API call failed with {}: {}", status, body);
            return Err(error::from_status(status, &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ApiConfig {
            base_url: "http://backoffice.test/api/v1/".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();

        assert_eq!(client.url("/fees"), "http://backoffice.test/api/v1/fees");
        assert_eq!(client.url("fees/3"), "http://backoffice.test/api/v1/fees/3");
        assert_eq!(client.login_url(), "http://backoffice.test/api/v1/users/login");
    }
}
