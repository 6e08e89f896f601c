//! Session persistence over a [`DurableStorage`].

use std::sync::Arc;

use remit_core::config::SessionConfig;
use remit_core::error::AppError;
use remit_entity::session::Session;
use remit_entity::user::SessionUser;

use crate::storage::DurableStorage;

/// Reads and writes the admin session under two storage keys.
///
/// The token is stored as-is; the user record as a JSON object. Nothing is
/// cached: every [`SessionStore::load_session`] goes back to storage.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Backing storage.
    storage: Arc<dyn DurableStorage>,
    /// Key of the opaque token.
    token_key: String,
    /// Key of the JSON user record.
    user_key: String,
}

impl SessionStore {
    /// Create a store using the configured keys.
    pub fn new(storage: Arc<dyn DurableStorage>, config: &SessionConfig) -> Self {
        Self {
            storage,
            token_key: config.token_key.clone(),
            user_key: config.user_key.clone(),
        }
    }

    /// Persist a session.
    ///
    /// The user record goes first and the token last, so a failed write
    /// never leaves a token without its user. On failure the store is left
    /// without a session.
    pub async fn save_session(&self, token: &str, user: &SessionUser) -> Result<(), AppError> {
        let record = serde_json::to_string(user)?;
        self.storage.set(&self.user_key, &record).await?;

        if let Err(e) = self.storage.set(&self.token_key, token).await {
            if let Err(undo) = self.storage.remove(&self.user_key).await {
                tracing::warn!("Failed to roll back session user record: {}", undo);
            }
            return Err(e);
        }

        tracing::info!("Session saved for role '{}'", user.role);
        Ok(())
    }

    /// Read the current session.
    ///
    /// Returns `None` when either key is missing, the token is empty, the
    /// user record does not parse, or storage cannot be read. A missing
    /// session is a normal state, never an error.
    pub async fn load_session(&self) -> Option<Session> {
        let token = self.read_key(&self.token_key).await?;
        let raw_user = self.read_key(&self.user_key).await?;

        if token.is_empty() {
            return None;
        }

        match serde_json::from_str::<SessionUser>(&raw_user) {
            Ok(user) => Some(Session::new(token, user)),
            Err(e) => {
                tracing::debug!("Ignoring unparsable session user record: {}", e);
                None
            }
        }
    }

    /// Remove both keys. Clearing an empty store succeeds.
    pub async fn clear_session(&self) -> Result<(), AppError> {
        self.storage.remove(&self.token_key).await?;
        self.storage.remove(&self.user_key).await?;
        tracing::info!("Session cleared");
        Ok(())
    }

    async fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read session key '{}': {}", key, e);
                None
            }
        }
    }
}
