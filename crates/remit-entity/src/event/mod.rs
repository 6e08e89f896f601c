//! Realtime events pushed by the back office.

pub mod model;

pub use model::{EventKind, NewTransaction, RealtimeEvent, StatusChange};
