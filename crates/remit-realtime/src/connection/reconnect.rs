//! Bounded exponential backoff between connection attempts.

use std::time::Duration;

use remit_core::config::ReconnectConfig;

/// When and how often to retry a lost or refused connection.
///
/// With `max_attempts == 0` (the default) the channel never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    max_attempts: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl ReconnectPolicy {
    /// A policy that never retries.
    pub fn disabled() -> Self {
        Self {
            max_attempts: 0,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// Build the policy from configuration.
    pub fn from_config(config: &ReconnectConfig) -> Self {
        let initial_backoff = Duration::from_millis(config.initial_backoff_ms);
        Self {
            max_attempts: config.max_attempts,
            initial_backoff,
            max_backoff: Duration::from_millis(config.max_backoff_ms).max(initial_backoff),
        }
    }

    /// Whether any retry will happen.
    pub fn is_enabled(&self) -> bool {
        self.max_attempts > 0
    }

    /// Delay before retry number `attempt` (zero-based), or `None` once the
    /// budget is spent.
    pub fn delay_for(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        Some(self.initial_backoff.saturating_mul(factor).min(self.max_backoff))
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}
