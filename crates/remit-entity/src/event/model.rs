//! Typed realtime events.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::transaction::{Amount, Severity};

/// Discriminator carried in the `type` field of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// A transfer was created.
    NewTransaction,
    /// A transfer moved to another status.
    StatusChange,
}

impl EventKind {
    /// Parse the wire discriminator. Unknown types yield `None`.
    pub fn from_wire(kind: &str) -> Option<Self> {
        match kind {
            "NEW_TRANSACTION" => Some(Self::NewTransaction),
            "STATUS_CHANGE" => Some(Self::StatusChange),
            _ => None,
        }
    }

    /// Return the wire discriminator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewTransaction => "NEW_TRANSACTION",
            Self::StatusChange => "STATUS_CHANGE",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload of a `NEW_TRANSACTION` frame.
///
/// Every field is optional on the wire: the frame type alone makes it a
/// new transaction, and whatever the payload carries is shown as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Transfer reference shown to operators.
    #[serde(default, deserialize_with = "lenient_text")]
    pub reference: String,
    /// Amount sent.
    #[serde(default)]
    pub amount: Amount,
    /// ISO currency code of `amount`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency: String,
    /// Raw status label.
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: String,
}

impl NewTransaction {
    /// Severity of the status tag, `None` for unmapped labels.
    pub fn severity(&self) -> Option<Severity> {
        Severity::for_status(&self.status)
    }
}

/// Payload of a `STATUS_CHANGE` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Transfer reference shown to operators.
    #[serde(default, deserialize_with = "lenient_text")]
    pub reference: String,
    /// Raw label of the previous status.
    #[serde(default, deserialize_with = "lenient_text")]
    pub old_status: String,
    /// Raw label of the new status.
    #[serde(default, deserialize_with = "lenient_text")]
    pub new_status: String,
}

impl StatusChange {
    /// Severity of the previous-status tag.
    pub fn old_severity(&self) -> Option<Severity> {
        Severity::for_status(&self.old_status)
    }

    /// Severity of the new-status tag.
    pub fn new_severity(&self) -> Option<Severity> {
        Severity::for_status(&self.new_status)
    }
}

/// Read a display string from any JSON value. `null` becomes empty; numbers
/// and other non-strings keep their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// An event pushed by the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RealtimeEvent {
    /// A transfer was created.
    NewTransaction(NewTransaction),
    /// A transfer changed status.
    StatusChange(StatusChange),
}

impl RealtimeEvent {
    /// Discriminator of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::NewTransaction(_) => EventKind::NewTransaction,
            Self::StatusChange(_) => EventKind::StatusChange,
        }
    }

    /// Reference of the transfer this event is about.
    pub fn reference(&self) -> &str {
        match self {
            Self::NewTransaction(t) => &t.reference,
            Self::StatusChange(c) => &c.reference,
        }
    }
}
