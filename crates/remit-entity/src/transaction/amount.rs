//! Transfer amounts as received on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An amount exactly as the back office sent it.
///
/// The console only displays amounts, so they are never converted: a JSON
/// number keeps its textual form and a string is shown verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// JSON number (`1500`, `99.95`).
    Number(serde_json::Number),
    /// JSON string (`"1500.00"`).
    Text(String),
    /// Anything else, including `null` or a missing amount.
    Raw(Value),
}

impl Default for Amount {
    fn default() -> Self {
        Self::Raw(Value::Null)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Raw(Value::Null) => Ok(()),
            Self::Raw(other) => write!(f, "{other}"),
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}
