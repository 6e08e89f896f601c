//! Transaction statuses and their display severity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a money transfer.
///
/// The back office sends statuses as their French display labels
/// (`"En attente"`, `"Effectuée"`, ...). The English variant names are
/// accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Created, waiting for the sender's deposit.
    Pending,
    /// Deposit received, payout not yet made.
    DepositConfirmed,
    /// Paid out to the recipient.
    Completed,
    /// Deposit window elapsed.
    Expired,
    /// Cancelled by an operator or the sender.
    Cancelled,
}

impl TransactionStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::DepositConfirmed,
        Self::Completed,
        Self::Expired,
        Self::Cancelled,
    ];

    /// Parse a wire label. Returns `None` for statuses the console does not know.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "En attente" | "Pending" => Some(Self::Pending),
            "Dépôt confirmé" | "DepositConfirmed" => Some(Self::DepositConfirmed),
            "Effectuée" | "Completed" => Some(Self::Completed),
            "Expirée" | "Expired" => Some(Self::Expired),
            "Annulée" | "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// The label the back office uses on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::DepositConfirmed => "Dépôt confirmé",
            Self::Completed => "Effectuée",
            Self::Expired => "Expirée",
            Self::Cancelled => "Annulée",
        }
    }

    /// Display severity of this status.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Pending => Severity::Warning,
            Self::DepositConfirmed => Severity::Info,
            Self::Completed => Severity::Success,
            Self::Expired | Self::Cancelled => Severity::Error,
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Colour class of a status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral information.
    Info,
    /// Completed successfully.
    Success,
    /// Needs attention.
    Warning,
    /// Failed or terminated.
    Error,
}

impl Severity {
    /// Severity for a raw status label, `None` when the label is unmapped.
    ///
    /// Unmapped labels render neutral; they are never an error.
    pub fn for_status(label: &str) -> Option<Self> {
        TransactionStatus::from_label(label).map(|s| s.severity())
    }

    /// Return the severity as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
