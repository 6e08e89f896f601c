//! Realtime channel configuration.

use serde::{Deserialize, Serialize};

/// Realtime (WebSocket) channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Push endpoint. Connected without credentials.
    #[serde(default = "default_url")]
    pub url: String,
    /// Capacity of the internal event bus shared by the toast and the badge.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
    /// Frames larger than this are dropped unparsed.
    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,
    /// Toast presentation settings.
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Reconnection policy. Disabled unless `max_attempts > 0`.
    #[serde(default)]
    pub reconnect: ReconnectConfig,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            channel_buffer_size: default_channel_buffer(),
            max_frame_bytes: default_max_frame_bytes(),
            notifications: NotificationConfig::default(),
            reconnect: ReconnectConfig::default(),
        }
    }
}

/// Toast presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Seconds a toast stays visible before it hides itself.
    #[serde(default = "default_auto_hide")]
    pub auto_hide_seconds: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_hide_seconds: default_auto_hide(),
        }
    }
}

/// Bounded retry-with-backoff for a dropped channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconnectConfig {
    /// Reconnect attempts after the first connection ends. `0` disables.
    #[serde(default)]
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds.
    #[serde(default = "default_initial_backoff")]
    pub initial_backoff_ms: u64,
    /// Upper bound on the doubled delay, in milliseconds.
    #[serde(default = "default_max_backoff")]
    pub max_backoff_ms: u64,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: 0,
            initial_backoff_ms: default_initial_backoff(),
            max_backoff_ms: default_max_backoff(),
        }
    }
}

fn default_url() -> String {
    "ws://localhost:8000/api/v1/transactions/ws/transactions".to_string()
}

fn default_channel_buffer() -> usize {
    64
}

fn default_max_frame_bytes() -> usize {
    65_536
}

fn default_auto_hide() -> u64 {
    6
}

fn default_initial_backoff() -> u64 {
    500
}

fn default_max_backoff() -> u64 {
    10_000
}
