//! Toast rendering for realtime events.

use std::fmt;

use remit_entity::event::RealtimeEvent;
use remit_entity::transaction::Severity;

/// A status label with its colour class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTag {
    /// Status label as sent by the back office.
    pub label: String,
    /// Colour class. `None` renders neutral.
    pub severity: Option<Severity>,
}

impl StatusTag {
    /// Tag for a raw status label.
    pub fn for_status(label: &str) -> Self {
        Self {
            label: label.to_string(),
            severity: Severity::for_status(label),
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Some(severity) => write!(f, "[{}|{}]", self.label, severity),
            None => write!(f, "[{}]", self.label),
        }
    }
}

/// Display model of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Heading line.
    pub title: String,
    /// Reference of the transfer.
    pub reference: String,
    /// `amount currency`, for new transactions only.
    pub amount: Option<String>,
    /// One tag for a new transaction, `[old, new]` for a status change.
    pub tags: Vec<StatusTag>,
}

impl Toast {
    /// Build the toast for an event.
    pub fn from_event(event: &RealtimeEvent) -> Self {
        match event {
            RealtimeEvent::NewTransaction(tx) => Self {
                title: "New transaction".to_string(),
                reference: tx.reference.clone(),
                amount: Some(format!("{} {}", tx.amount, tx.currency).trim().to_string()),
                tags: vec![StatusTag::for_status(&tx.status)],
            },
            RealtimeEvent::StatusChange(change) => Self {
                title: "Status update".to_string(),
                reference: change.reference.clone(),
                amount: None,
                tags: vec![
                    StatusTag::for_status(&change.old_status),
                    StatusTag::for_status(&change.new_status),
                ],
            },
        }
    }

    /// Severity used for the toast frame: that of the last tag.
    pub fn severity(&self) -> Option<Severity> {
        self.tags.last().and_then(|t| t.severity)
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        match &self.amount {
            Some(amount) => {
                writeln!(f, "  Reference: {}", self.reference)?;
                writeln!(f, "  Amount:    {amount}")?;
                if let Some(tag) = self.tags.first() {
                    write!(f, "  Status:    {tag}")?;
                }
            }
            None => {
                let tags: Vec<String> = self.tags.iter().map(ToString::to_string).collect();
                writeln!(f, "  {}", tags.join(" → "))?;
                write!(f, "  Reference: {}", self.reference)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remit_entity::event::{NewTransaction, StatusChange};
    use remit_entity::transaction::Amount;

    #[test]
    fn test_new_transaction_toast() {
        let toast = Toast::from_event(&RealtimeEvent::NewTransaction(NewTransaction {
            reference: "TX-42".to_string(),
            amount: Amount::Text("25000".to_string()),
            currency: "XOF".to_string(),
            status: "Dépôt confirmé".to_string(),
        }));

        assert_eq!(toast.amount.as_deref(), Some("25000 XOF"));
        assert_eq!(toast.tags.len(), 1);
        assert_eq!(toast.severity(), Some(Severity::Info));

        let text = toast.to_string();
        assert!(text.starts_with("New transaction\n"));
        assert!(text.contains("Reference: TX-42"));
        assert!(text.contains("[Dépôt confirmé|info]"));
    }

    #[test]
    fn test_status_change_toast() {
        let toast = Toast::from_event(&RealtimeEvent::StatusChange(StatusChange {
            reference: "TX-42".to_string(),
            old_status: "En attente".to_string(),
            new_status: "Effectuée".to_string(),
        }));

        let severities: Vec<_> = toast.tags.iter().map(|t| t.severity).collect();
        assert_eq!(
            severities,
            vec![Some(Severity::Warning), Some(Severity::Success)]
        );
        assert!(
            toast
                .to_string()
                .contains("[En attente|warning] → [Effectuée|success]")
        );
    }

    #[test]
    fn test_partial_new_transaction_renders() {
        let toast = Toast::from_event(&RealtimeEvent::NewTransaction(NewTransaction {
            reference: "1042".to_string(),
            amount: Amount::default(),
            currency: "XOF".to_string(),
            status: String::new(),
        }));

        assert_eq!(toast.amount.as_deref(), Some("XOF"));
        assert_eq!(toast.severity(), None);
        assert!(toast.to_string().contains("Reference: 1042"));
    }

    #[test]
    fn test_unmapped_status_renders_neutral() {
        let tag = StatusTag::for_status("Remboursée");
        assert_eq!(tag.severity, None);
        assert_eq!(tag.to_string(), "[Remboursée]");
    }
}
