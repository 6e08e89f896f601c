//! # remit-entity
//!
//! Domain models shared by the console crates: the persisted admin
//! session, user roles, transaction statuses with their display severity,
//! and the typed realtime events pushed by the back office.

pub mod event;
pub mod session;
pub mod transaction;
pub mod user;
