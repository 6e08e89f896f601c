//! Inbound frame parsing and validation.

pub mod decoder;
pub mod frame;
pub mod validator;

pub use decoder::{Decoded, decode_text};
pub use frame::InboundFrame;
