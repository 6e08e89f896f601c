//! Live feed: the realtime machinery for one stay in the protected area.
//!
//! [`LiveFeed::mount`] opens one connection and starts the presenter and
//! badge on a shared event bus. [`LiveFeed::unmount`] tears all of it
//! down; nothing received afterwards reaches either consumer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use remit_core::config::RealtimeConfig;

use crate::bridge::EventBus;
use crate::connection::{ChannelStatus, RealtimeChannel};
use crate::notification::{NotificationPresenter, NotificationState, PresenterCommand, UnseenCounter};

/// Handle to a mounted live feed.
#[derive(Debug)]
pub struct LiveFeed {
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
    notifications: watch::Receiver<NotificationState>,
    status: watch::Receiver<ChannelStatus>,
    unseen: Arc<UnseenCounter>,
    commands: mpsc::Sender<PresenterCommand>,
}

impl LiveFeed {
    /// Open the realtime channel and start its consumers.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(config: &RealtimeConfig) -> Self {
        let cancel = CancellationToken::new();
        let bus = EventBus::new(config.channel_buffer_size);

        // Consumers subscribe before the channel can publish anything.
        let presenter =
            NotificationPresenter::new(Duration::from_secs(config.notifications.auto_hide_seconds));
        let notifications = presenter.subscribe();
        let (commands, command_rx) = mpsc::channel(8);
        let presenter_task = tokio::spawn(presenter.run(bus.subscribe(), command_rx, cancel.clone()));

        let unseen = Arc::new(UnseenCounter::new());
        let badge_task = {
            let unseen = Arc::clone(&unseen);
            let events = bus.subscribe();
            let cancel = cancel.clone();
            tokio::spawn(async move { unseen.run(events, cancel).await })
        };

        let channel = RealtimeChannel::new(config, bus);
        let status = channel.status();
        let channel_task = tokio::spawn(channel.run(cancel.clone()));

        tracing::debug!("Live feed mounted on {}", config.url);

        Self {
            cancel,
            tasks: vec![channel_task, presenter_task, badge_task],
            notifications,
            status,
            unseen,
            commands,
        }
    }

    /// Watch the toast state.
    pub fn notifications(&self) -> watch::Receiver<NotificationState> {
        self.notifications.clone()
    }

    /// Current toast state.
    pub fn notification(&self) -> NotificationState {
        self.notifications.borrow().clone()
    }

    /// Watch the unseen count.
    pub fn unseen(&self) -> watch::Receiver<u64> {
        self.unseen.subscribe()
    }

    /// Current unseen count.
    pub fn unseen_count(&self) -> u64 {
        self.unseen.count()
    }

    /// Reset the unseen count.
    pub fn mark_all_read(&self) {
        self.unseen.mark_all_read();
    }

    /// Close the visible toast.
    pub async fn dismiss(&self) {
        if self.commands.send(PresenterCommand::Dismiss).await.is_err() {
            tracing::debug!("Dismiss after the presenter stopped");
        }
    }

    /// Watch the channel status.
    pub fn status(&self) -> watch::Receiver<ChannelStatus> {
        self.status.clone()
    }

    /// Close the connection and wait for every task to stop.
    pub async fn unmount(mut self) {
        self.cancel.cancel();
        for task in self.tasks.drain(..) {
            if let Err(e) = task.await {
                tracing::warn!("Live feed task ended abnormally: {}", e);
            }
        }
        tracing::debug!("Live feed unmounted");
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
