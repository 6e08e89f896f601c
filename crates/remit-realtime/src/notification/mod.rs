//! Consumers of the event bus: the toast presenter and the unseen badge.

pub mod badge;
pub mod presenter;
pub mod state;
pub mod toast;

pub use badge::UnseenCounter;
pub use presenter::{NotificationPresenter, PresenterCommand};
pub use state::{Notification, NotificationState};
pub use toast::{StatusTag, Toast};
