//! Interactive console.
//!
//! A line-oriented stand-in for the admin layout: every `/path` goes
//! through the route guard, the protected area owns one mounted
//! [`LiveFeed`], and toasts are printed as the presenter publishes them.

mod input;
mod screen;

use tokio::sync::watch;

use remit_auth::{Navigation, Route, RouteGuard};
use remit_core::error::AppError;
use remit_entity::session::Session;
use remit_realtime::{ChannelStatus, LiveFeed, NotificationState};

use crate::commands::Context;
use crate::output::{self, OutputFormat};
use crate::prompt;

use input::ShellInput;

/// Path shown right after a successful login.
const HOME: &str = "/";

/// The live feed of the protected area, with the watchers the shell renders from.
struct Live {
    feed: LiveFeed,
    notifications: watch::Receiver<NotificationState>,
    status: watch::Receiver<ChannelStatus>,
    toasts_open: bool,
    status_open: bool,
    last_shown: u64,
}

impl Live {
    fn mount(ctx: &Context) -> Self {
        let feed = LiveFeed::mount(&ctx.config.realtime);
        let notifications = feed.notifications();
        let status = feed.status();
        Self {
            feed,
            notifications,
            status,
            toasts_open: true,
            status_open: true,
            last_shown: 0,
        }
    }

    /// Print the toast if a new one became visible.
    fn render_notifications(&mut self) -> bool {
        let state = self.notifications.borrow_and_update().clone();
        match state.visible() {
            Some(notification) if notification.sequence > self.last_shown => {
                self.last_shown = notification.sequence;
                screen::print_toast(notification);
                true
            }
            _ => false,
        }
    }

    fn render_status(&mut self) -> bool {
        let status = self.status.borrow_and_update().clone();
        screen::print_status(&status);
        status.is_failed()
    }
}

/// Interactive console session.
pub struct Shell {
    ctx: Context,
    guard: RouteGuard,
    live: Option<Live>,
    location: String,
}

impl Shell {
    /// Create a shell over the shared services.
    pub fn new(ctx: Context) -> Self {
        let guard = ctx.guard();
        let location = guard.login_path().to_string();
        Self {
            ctx,
            guard,
            live: None,
            location,
        }
    }

    /// Clear the stored session. A storage failure is reported and the
    /// console stays where it is.
    async fn end_session(&self) -> bool {
        match self.ctx.sessions.logout().await {
            Ok(()) => {
                output::print_success("Logged out");
                true
            }
            Err(e) => {
                tracing::warn!("Logout failed: {}", e);
                output::print_error(&format!("Logout failed: {}", e));
                false
            }
        }
    }

    /// Open `start` and run until `quit` or end of input.
    pub async fn run(mut self, start: &str) -> Result<(), AppError> {
        let result = self.repl(start).await;
        self.leave().await;
        result
    }

    async fn repl(&mut self, start: &str) -> Result<(), AppError> {
        self.go(start).await?;

        loop {
            screen::print_prompt(&self.location, self.unseen());
            let Some(line) = self.next_line().await? else {
                println!();
                break;
            };

            match ShellInput::parse(&line) {
                ShellInput::Navigate(path) => self.go(&path).await?,
                ShellInput::Dismiss => match &self.live {
                    Some(live) if live.feed.notification().is_visible() => live.feed.dismiss().await,
                    _ => output::print_warning("No notification to dismiss"),
                },
                ShellInput::Read => match &self.live {
                    Some(live) => {
                        live.feed.mark_all_read();
                        output::print_success("All transactions marked as read");
                    }
                    None => output::print_warning("Log in to see notifications"),
                },
                ShellInput::Logout => {
                    if self.end_session().await {
                        let login = self.guard.login_path().to_string();
                        self.go(&login).await?;
                    }
                }
                ShellInput::Help => screen::print_help(),
                ShellInput::Quit => break,
                ShellInput::Empty => {}
                ShellInput::Unknown(command) => output::print_warning(&format!(
                    "Unknown command '{}'. Type 'help' for the list.",
                    command
                )),
            }
        }

        Ok(())
    }

    /// Navigate, following redirects to the login screen.
    async fn go(&mut self, path: &str) -> Result<(), AppError> {
        let mut target = path.to_string();

        loop {
            match self.guard.navigate(&target).await {
                Navigation::Login => {
                    self.leave().await;
                    self.location = target;
                    if !self.login_screen().await? {
                        return Ok(());
                    }
                    target = HOME.to_string();
                }
                Navigation::Redirect { to, reason } => {
                    screen::print_redirect(reason);
                    target = to;
                }
                Navigation::Protected { route, session } => {
                    self.enter();
                    self.location = route.path().to_string();
                    if self.show(route, &session).await {
                        return Ok(());
                    }
                    target = self.guard.login_path().to_string();
                }
            }
        }
    }

    /// Prompt for credentials until login succeeds or the operator leaves
    /// the credential empty.
    async fn login_screen(&mut self) -> Result<bool, AppError> {
        println!();
        println!("== Administrator login ==");

        loop {
            let credential = blocking(prompt::credential).await?;
            if credential.is_empty() {
                output::print_warning("Login skipped. Type a path to navigate or 'quit'.");
                return Ok(false);
            }
            let password = blocking(prompt::password).await?;

            match self.ctx.sessions.login(&credential, &password).await {
                Ok(session) => {
                    let name = session.user.display_name().unwrap_or(&credential).to_string();
                    output::print_success(&format!("Welcome, {}", name));
                    return Ok(true);
                }
                Err(e) => output::print_error(&e.message),
            }
        }
    }

    /// Render a protected view. Returns `false` when the back office
    /// rejected the session.
    async fn show(&mut self, route: Route, session: &Session) -> bool {
        screen::print_view_header(route);

        let kind = screen::resource_for(route);
        match self.ctx.api.list(kind, Some(session)).await {
            Ok(records) => {
                output::print_records(&records, OutputFormat::Table);
                true
            }
            Err(e) if e.requires_login() => {
                output::print_error(&e.message);
                false
            }
            Err(e) => {
                output::print_error(&format!("Could not load {}: {}", kind, e.message));
                true
            }
        }
    }

    /// Mount the live feed if the protected area is not already open.
    fn enter(&mut self) {
        if self.live.is_none() {
            tracing::info!("Entering protected area");
            self.live = Some(Live::mount(&self.ctx));
        }
    }

    /// Unmount the live feed, if any.
    async fn leave(&mut self) {
        if let Some(live) = self.live.take() {
            tracing::info!("Leaving protected area");
            live.feed.unmount().await;
        }
    }

    fn unseen(&self) -> Option<u64> {
        self.live.as_ref().map(|live| live.feed.unseen_count())
    }

    /// Read one line from stdin, printing live updates while waiting.
    async fn next_line(&mut self) -> Result<Option<String>, AppError> {
        let mut read = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin()
                .read_line(&mut line)
                .map(|n| (n > 0).then_some(line))
        });

        loop {
            let Some(live) = self.live.as_mut() else {
                return joined(read.await);
            };

            tokio::select! {
                result = &mut read => return joined(result),
                changed = live.notifications.changed(), if live.toasts_open => {
                    if changed.is_err() {
                        live.toasts_open = false;
                    } else if live.render_notifications() {
                        screen::print_prompt(&self.location, Some(live.feed.unseen_count()));
                    }
                }
                changed = live.status.changed(), if live.status_open => {
                    if changed.is_err() {
                        live.status_open = false;
                    } else if live.render_status() {
                        screen::print_prompt(&self.location, Some(live.feed.unseen_count()));
                    }
                }
            }
        }
    }
}

/// Run a blocking prompt off the runtime.
async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal(format!("Input task failed: {}", e)))?
}

fn joined(
    result: Result<std::io::Result<Option<String>>, tokio::task::JoinError>,
) -> Result<Option<String>, AppError> {
    result
        .map_err(|e| AppError::internal(format!("Input task failed: {}", e)))?
        .map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use remit_auth::{DurableStorage, MemoryStorage};
    use remit_core::config::AppConfig;
    use remit_entity::user::{SessionUser, UserRole};

    use super::*;

    /// Memory storage whose keys cannot be removed.
    #[derive(Debug, Default)]
    struct StuckStorage {
        inner: MemoryStorage,
    }

    #[async_trait]
    impl DurableStorage for StuckStorage {
        async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, _key: &str) -> Result<(), AppError> {
            Err(AppError::storage("session file is read-only"))
        }
    }

    async fn logged_in_shell(storage: Arc<dyn DurableStorage>) -> Shell {
        let ctx = Context::with_storage(AppConfig::default(), storage).unwrap();
        ctx.store
            .save_session("tok-1", &SessionUser::new(UserRole::Admin))
            .await
            .unwrap();
        Shell::new(ctx)
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let shell = logged_in_shell(Arc::new(MemoryStorage::new())).await;

        assert!(shell.end_session().await);
        assert!(shell.ctx.store.load_session().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_console_running() {
        let shell = logged_in_shell(Arc::new(StuckStorage::default())).await;

        assert!(!shell.end_session().await);
        assert!(shell.ctx.store.load_session().await.is_some());
    }
}
