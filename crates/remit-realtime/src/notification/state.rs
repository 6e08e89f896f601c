//! Presenter state and its transitions.
//!
//! The reducer is pure: callers pass in the clock, so the transitions are
//! testable without a runtime. [`super::presenter`] drives it from the bus.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use remit_entity::event::RealtimeEvent;

/// A realtime event accepted by the presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// The event to display.
    pub event: RealtimeEvent,
    /// Wall-clock arrival time, for display.
    pub received_at: DateTime<Utc>,
    /// Increases by one for every accepted event.
    pub sequence: u64,
}

/// What the toast area currently shows.
///
/// There is at most one notification. A new event replaces it; nothing is
/// queued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationState {
    current: Option<Notification>,
    visible: bool,
    hide_at: Option<Instant>,
    accepted: u64,
}

impl NotificationState {
    /// Empty state: nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest accepted notification, shown or not.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// The notification on screen, if the toast is visible.
    pub fn visible(&self) -> Option<&Notification> {
        if self.visible {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// Whether the toast is on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// When the visible toast hides itself.
    pub fn hide_at(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Number of events accepted since mount.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Show `event`, replacing whatever was there and restarting the timer.
    pub fn apply(&mut self, event: RealtimeEvent, now: Instant, auto_hide: Duration) {
        self.accepted += 1;
        self.current = Some(Notification {
            event,
            received_at: Utc::now(),
            sequence: self.accepted,
        });
        self.visible = true;
        self.hide_at = Some(now + auto_hide);
    }

    /// Hide the toast. Returns `false` if nothing was visible.
    pub fn dismiss(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.hide_at = None;
        true
    }

    /// Hide the toast if its timer has run out at `now`.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if self.visible && now >= deadline => self.dismiss(),
            _ => false,
        }
    }
}
