//! Toast presenter task.
//!
//! Owns the [`NotificationState`], applies bus events in arrival order,
//! runs the auto-hide timer and publishes each new state on a `watch`
//! channel for the screen to render.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use remit_entity::event::RealtimeEvent;

use super::state::NotificationState;

/// Operator actions on the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterCommand {
    /// Close the visible toast now.
    Dismiss,
}

/// Drives the toast from the event bus.
#[derive(Debug)]
pub struct NotificationPresenter {
    state: NotificationState,
    auto_hide: Duration,
    published: watch::Sender<NotificationState>,
}

impl NotificationPresenter {
    /// Create a presenter that hides toasts after `auto_hide`.
    pub fn new(auto_hide: Duration) -> Self {
        let (published, _) = watch::channel(NotificationState::new());
        Self {
            state: NotificationState::new(),
            auto_hide,
            published,
        }
    }

    /// Watch the presented state.
    pub fn subscribe(&self) -> watch::Receiver<NotificationState> {
        self.published.subscribe()
    }

    /// Run until cancelled.
    ///
    /// Once the bus closes, the presenter keeps serving the timer and
    /// commands so a toast already shown still hides on schedule.
    pub async fn run(
        mut self,
        mut events: broadcast::Receiver<RealtimeEvent>,
        mut commands: mpsc::Receiver<PresenterCommand>,
        cancel: CancellationToken,
    ) {
        let mut events_open = true;
        let mut commands_open = true;

        loop {
            let hide_at = self.state.hide_at();

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                command = commands.recv(), if commands_open => match command {
                    Some(PresenterCommand::Dismiss) => {
                        if self.state.dismiss() {
                            self.publish();
                        }
                    }
                    None => commands_open = false,
                },
                _ = tokio::time::sleep_until(hide_at.unwrap_or_else(Instant::now)), if hide_at.is_some() => {
                    if self.state.expire(Instant::now()) {
                        self.publish();
                    }
                }
                received = events.recv(), if events_open => match received {
                    Ok(event) => {
                        self.state.apply(event, Instant::now(), self.auto_hide);
                        self.publish();
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("Notification presenter lagged, {} events skipped", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => events_open = false,
                },
            }
        }
    }

    fn publish(&self) {
        self.published.send_replace(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remit_entity::event::{NewTransaction, StatusChange};
    use remit_entity::transaction::Amount;

    struct Running {
        events: broadcast::Sender<RealtimeEvent>,
        commands: mpsc::Sender<PresenterCommand>,
        state: watch::Receiver<NotificationState>,
        cancel: CancellationToken,
        task: tokio::task::JoinHandle<()>,
    }

    fn start() -> Running {
        let presenter = NotificationPresenter::new(Duration::from_secs(6));
        let state = presenter.subscribe();
        let (events, rx) = broadcast::channel(8);
        let (commands, command_rx) = mpsc::channel(4);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(presenter.run(rx, command_rx, cancel.clone()));
        Running {
            events,
            commands,
            state,
            cancel,
            task,
        }
    }

    fn new_tx(reference: &str) -> RealtimeEvent {
        RealtimeEvent::NewTransaction(NewTransaction {
            reference: reference.to_string(),
            amount: Amount::from(700),
            currency: "EUR".to_string(),
            status: "En attente".to_string(),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_hide_after_six_seconds() {
        let mut running = start();

        running.events.send(new_tx("TX-1")).unwrap();
        running.state.changed().await.unwrap();
        assert!(running.state.borrow().is_visible());

        tokio::time::sleep(Duration::from_millis(5_900)).await;
        assert!(running.state.borrow().is_visible());

        running.state.changed().await.unwrap();
        assert!(!running.state.borrow().is_visible());

        running.cancel.cancel();
        running.task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_event_restarts_timer() {
        let mut running = start();

        running.events.send(new_tx("TX-1")).unwrap();
        running.state.changed().await.unwrap();

        tokio::time::sleep(Duration::from_secs(4)).await;
        running
            .events
            .send(RealtimeEvent::StatusChange(StatusChange {
                reference: "TX-1".to_string(),
                old_status: "En attente".to_string(),
                new_status: "Effectuée".to_string(),
            }))
            .unwrap();
        running.state.changed().await.unwrap();

        tokio::time::sleep(Duration::from_secs(4)).await;
        {
            let state = running.state.borrow();
            let shown = state.visible().unwrap();
            assert!(matches!(shown.event, RealtimeEvent::StatusChange(_)));
            assert_eq!(shown.sequence, 2);
        }

        running.cancel.cancel();
        running.task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_hides_immediately() {
        let mut running = start();

        running.events.send(new_tx("TX-9")).unwrap();
        running.state.changed().await.unwrap();

        running
            .commands
            .send(PresenterCommand::Dismiss)
            .await
            .unwrap();
        running.state.changed().await.unwrap();
        assert!(running.state.borrow().visible().is_none());

        running.cancel.cancel();
        running.task.await.unwrap();
    }
}
