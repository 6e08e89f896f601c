//! Observable channel state.

use std::fmt;

/// State of the realtime channel as seen by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelStatus {
    /// Opening the connection.
    Connecting,
    /// Connected and receiving frames.
    Open,
    /// The connection could not be opened or was lost. Events stop arriving
    /// until the protected area is mounted again.
    Failed(String),
    /// Closed by the console (unmount).
    Closed,
}

impl ChannelStatus {
    /// Whether the channel failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connecting => write!(f, "connecting"),
            Self::Open => write!(f, "live"),
            Self::Failed(reason) => write!(f, "offline ({reason})"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
