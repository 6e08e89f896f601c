//! Admin login and logout.

use remit_api::{ApiClient, LoginRequest};
use remit_core::error::AppError;
use remit_entity::session::Session;
use remit_entity::user::SessionUser;

use super::store::SessionStore;

/// Message shown when a non-admin account logs in.
const ADMIN_ONLY: &str = "Access is restricted to administrators";

/// Runs the login flow and owns the session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// REST client used for the login call.
    api: ApiClient,
    /// Where the session is persisted.
    store: SessionStore,
}

impl SessionManager {
    /// Create a session manager.
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// The underlying session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Log in and persist the session.
    ///
    /// Any role other than `admin` fails with an authorization error and
    /// leaves storage untouched.
    pub async fn login(&self, credential: &str, password: &str) -> Result<Session, AppError> {
        let response = self
            .api
            .login(&LoginRequest::new(credential, password))
            .await?;

        if response.role != "admin" {
            tracing::warn!(
                "Rejected console login for '{}' with role '{}'",
                credential,
                response.role
            );
            return Err(AppError::authorization(ADMIN_ONLY));
        }

        let user: SessionUser = serde_json::from_value(response.to_user_record())?;
        self.store
            .save_session(&response.access_token, &user)
            .await?;

        tracing::info!("Admin '{}' logged in", credential);
        Ok(Session::new(response.access_token, user))
    }

    /// Forget the session. Safe to call when logged out.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.store.clear_session().await
    }

    /// The persisted session, if any.
    pub async fn current(&self) -> Option<Session> {
        self.store.load_session().await
    }
}
