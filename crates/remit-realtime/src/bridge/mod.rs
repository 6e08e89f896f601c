//! Fan-out of decoded events to in-process consumers.

pub mod event_bus;

pub use event_bus::EventBus;
