//! Turns text frames into typed events.

use remit_entity::event::{EventKind, NewTransaction, RealtimeEvent, StatusChange};
use serde_json::{Map, Value};

use super::frame::InboundFrame;
use super::validator::{validate_frame, FrameRejection};

/// Result of decoding one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// A recognized event.
    Event(RealtimeEvent),
    /// Well-formed frame of a type this console does not handle.
    Ignored(String),
    /// Not JSON, no string `type`, or rejected by validation.
    Malformed(String),
}

/// Decode a text frame.
///
/// Never fails: anything that is not a recognized, well-formed event comes
/// back as [`Decoded::Ignored`] or [`Decoded::Malformed`] for the caller to
/// drop.
pub fn decode_text(raw: &str, max_bytes: usize) -> Decoded {
    match validate_frame(raw, max_bytes) {
        Ok(()) => {}
        Err(FrameRejection::TooLarge(len)) => {
            return Decoded::Malformed(format!("frame of {len} bytes exceeds {max_bytes}"));
        }
        Err(FrameRejection::Empty) => return Decoded::Malformed("empty frame".to_string()),
    }

    let frame: InboundFrame = match serde_json::from_str(raw) {
        Ok(frame) => frame,
        Err(e) => return Decoded::Malformed(format!("invalid frame: {e}")),
    };

    let Some(kind) = EventKind::from_wire(&frame.kind) else {
        return Decoded::Ignored(frame.kind);
    };

    // The type decides the event; a missing or non-object payload only
    // leaves the displayed fields empty.
    let data = match frame.data {
        Value::Object(fields) => Value::Object(fields),
        _ => Value::Object(Map::new()),
    };

    let event = match kind {
        EventKind::NewTransaction => {
            serde_json::from_value::<NewTransaction>(data).map(RealtimeEvent::NewTransaction)
        }
        EventKind::StatusChange => {
            serde_json::from_value::<StatusChange>(data).map(RealtimeEvent::StatusChange)
        }
    };

    match event {
        Ok(event) => Decoded::Event(event),
        Err(e) => Decoded::Malformed(format!("invalid {kind} payload: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remit_entity::transaction::Amount;

    const LIMIT: usize = 65_536;

    #[test]
    fn test_new_transaction() {
        let raw = r#"{"type":"NEW_TRANSACTION","data":{"reference":"TX-9","amount":150000,"currency":"XOF","status":"En attente"}}"#;
        match decode_text(raw, LIMIT) {
            Decoded::Event(RealtimeEvent::NewTransaction(tx)) => {
                assert_eq!(tx.reference, "TX-9");
                assert_eq!(tx.amount, Amount::from(150_000));
                assert_eq!(tx.currency, "XOF");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_status_change() {
        let raw = r#"{"type":"STATUS_CHANGE","data":{"reference":"TX-9","old_status":"En attente","new_status":"Effectuée"}}"#;
        assert!(matches!(
            decode_text(raw, LIMIT),
            Decoded::Event(RealtimeEvent::StatusChange(_))
        ));
    }

    #[test]
    fn test_unknown_type_is_ignored() {
        let raw = r#"{"type":"BALANCE_UPDATE","data":{"reference":"TX-9"}}"#;
        assert_eq!(
            decode_text(raw, LIMIT),
            Decoded::Ignored("BALANCE_UPDATE".to_string())
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        for raw in ["not json", "[1,2,3]", r#"{"data":{}}"#, r#"{"type":5}"#, ""] {
            assert!(
                matches!(decode_text(raw, LIMIT), Decoded::Malformed(_)),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_partial_payload_still_yields_event() {
        let frames = [
            r#"{"type":"NEW_TRANSACTION","data":{"reference":1042,"amount":5,"currency":"XOF","status":"En attente"}}"#,
            r#"{"type":"NEW_TRANSACTION","data":{"reference":"TX-1","amount":null,"currency":"XOF","status":"En attente"}}"#,
            r#"{"type":"NEW_TRANSACTION","data":{"reference":"TX-2","amount":5,"currency":"XOF"}}"#,
            r#"{"type":"NEW_TRANSACTION"}"#,
            r#"{"type":"NEW_TRANSACTION","data":"oops"}"#,
        ];
        for raw in frames {
            assert!(
                matches!(
                    decode_text(raw, LIMIT),
                    Decoded::Event(RealtimeEvent::NewTransaction(_))
                ),
                "{raw} should decode"
            );
        }

        let raw = r#"{"type":"STATUS_CHANGE","data":{"reference":"TX-9"}}"#;
        match decode_text(raw, LIMIT) {
            Decoded::Event(RealtimeEvent::StatusChange(change)) => {
                assert_eq!(change.reference, "TX-9");
                assert_eq!(change.new_status, "");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_oversize_frame_is_malformed() {
        let raw = format!(
            r#"{{"type":"NEW_TRANSACTION","data":{{"reference":"{}"}}}}"#,
            "A".repeat(128)
        );
        assert!(matches!(decode_text(&raw, 64), Decoded::Malformed(_)));
    }
}
