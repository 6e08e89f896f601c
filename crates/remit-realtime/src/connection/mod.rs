//! The realtime WebSocket channel and its lifecycle.

pub mod channel;
pub mod reconnect;
pub mod status;

pub use channel::RealtimeChannel;
pub use reconnect::ReconnectPolicy;
pub use status::ChannelStatus;
