//! Console configuration schemas.
//!
//! All sections deserialize from TOML via the `config` crate and carry
//! serde defaults, so the console runs with no configuration file at all.

pub mod api;
pub mod logging;
pub mod realtime;
pub mod session;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::logging::LoggingConfig;
pub use self::realtime::{NotificationConfig, RealtimeConfig, ReconnectConfig};
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root console configuration.
///
/// Deserialization target for the merged base file, environment overlay
/// and `REMIT__*` environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// REST API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Realtime channel and notification settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,
    /// Local session persistence settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Layers, lowest precedence first: the file at `config_path`, an
    /// optional `{env}` overlay next to it, then environment variables
    /// prefixed with `REMIT__` (`REMIT__API__BASE_URL=...`). Missing files
    /// are skipped.
    pub fn load(config_path: &str, env: &str) -> Result<Self, AppError> {
        let base = Path::new(config_path);
        let overlay = base
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(env);

        let config = config::Config::builder()
            .add_source(config::File::from(base).required(false))
            .add_source(config::File::with_name(&overlay.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("REMIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
