//! Raw inbound frame.

use serde::Deserialize;
use serde_json::Value;

/// A frame as received, before its payload is interpreted.
///
/// `type` is read first; `data` is only decoded once the type is known.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundFrame {
    /// Event discriminator (`NEW_TRANSACTION`, `STATUS_CHANGE`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Event payload.
    #[serde(default)]
    pub data: Value,
}
