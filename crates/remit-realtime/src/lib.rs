//! # remit-realtime
//!
//! Live transaction feed for the admin console:
//!
//! - One WebSocket connection per mount of the protected area, no
//!   credentials, optional bounded reconnect
//! - Frame decoding by `type`, with unknown or malformed frames dropped
//! - A single internal event bus feeding every consumer
//! - The toast presenter (latest event wins, auto-hide) and the unseen badge

pub mod bridge;
pub mod connection;
pub mod feed;
pub mod message;
pub mod notification;

pub use bridge::EventBus;
pub use connection::{ChannelStatus, RealtimeChannel, ReconnectPolicy};
pub use feed::LiveFeed;
pub use notification::{NotificationPresenter, NotificationState, Toast, UnseenCounter};
