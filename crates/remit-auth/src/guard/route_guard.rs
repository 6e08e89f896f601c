//! The route guard.

use remit_entity::session::Session;

use super::route::Route;
use crate::session::SessionStore;

/// Outcome of evaluating the session.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    /// No usable admin session.
    Unauthenticated,
    /// An admin session is present.
    Authenticated(Session),
}

/// Why a navigation was redirected to the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// No session in storage.
    NoSession,
    /// A session exists but its role is not `admin`.
    NotAdmin,
    /// The path matches no route.
    UnknownRoute,
}

/// Result of a navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// The public login screen.
    Login,
    /// A protected view, with the session that authorized it.
    Protected {
        /// Destination.
        route: Route,
        /// Session read for this navigation.
        session: Session,
    },
    /// Sent to the login screen. The requested destination is discarded.
    Redirect {
        /// Login path.
        to: String,
        /// Cause of the redirect.
        reason: RedirectReason,
    },
}

impl Navigation {
    /// Whether this navigation renders protected content.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Protected { .. })
    }
}

/// Decides every navigation from the session currently in storage.
///
/// Nothing is cached between navigations, so a logout performed by another
/// process sharing the storage applies on the next navigation here.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    /// Session source.
    store: SessionStore,
    /// Public login path and redirect target.
    login_path: String,
}

impl RouteGuard {
    /// Create a guard.
    pub fn new(store: SessionStore, login_path: impl Into<String>) -> Self {
        Self {
            store,
            login_path: login_path.into(),
        }
    }

    /// Login path used for redirects.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Evaluate the stored session.
    pub async fn state(&self) -> GuardState {
        match self.store.load_session().await {
            Some(session) if session.is_admin() => GuardState::Authenticated(session),
            _ => GuardState::Unauthenticated,
        }
    }

    /// Decide a navigation to `path`.
    pub async fn navigate(&self, path: &str) -> Navigation {
        if path == self.login_path {
            return Navigation::Login;
        }

        let Some(route) = Route::from_path(path) else {
            tracing::debug!("Unknown route '{}', redirecting to login", path);
            return self.redirect(RedirectReason::UnknownRoute);
        };

        match self.store.load_session().await {
            None => self.redirect(RedirectReason::NoSession),
            Some(session) if !session.is_admin() => {
                tracing::warn!(
                    "Session role '{}' may not open '{}'",
                    session.user.role,
                    path
                );
                self.redirect(RedirectReason::NotAdmin)
            }
            Some(session) => Navigation::Protected { route, session },
        }
    }

    fn redirect(&self, reason: RedirectReason) -> Navigation {
        Navigation::Redirect {
            to: self.login_path.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use remit_core::config::SessionConfig;
    use remit_entity::user::{SessionUser, UserRole};

    use super::*;
    use crate::storage::MemoryStorage;

    const ALL_PROTECTED: [&str; 11] = [
        "/",
        "/transactions",
        "/countries",
        "/currencies",
        "/exchange-rates",
        "/fees",
        "/receiving-methods",
        "/payment-methods",
        "/rates",
        "/users",
        "/notifications",
    ];

    fn make_guard() -> (SessionStore, RouteGuard) {
        let config = SessionConfig::default();
        let store = SessionStore::new(Arc::new(MemoryStorage::new()), &config);
        let guard = RouteGuard::new(store.clone(), config.login_path);
        (store, guard)
    }

    fn assert_redirect(nav: Navigation, expected: RedirectReason) {
        match nav {
            Navigation::Redirect { to, reason } => {
                assert_eq!(to, "/admin/login");
                assert_eq!(reason, expected);
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_session_redirects_everywhere() {
        let (_, guard) = make_guard();
        for path in ALL_PROTECTED {
            assert_redirect(guard.navigate(path).await, RedirectReason::NoSession);
        }
        assert_eq!(guard.state().await, GuardState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_non_admin_roles_redirect_everywhere() {
        let (store, guard) = make_guard();
        for role in [UserRole::Agent, UserRole::User] {
            store
                .save_session("tok", &SessionUser::new(role))
                .await
                .unwrap();
            for path in ALL_PROTECTED {
                assert_redirect(guard.navigate(path).await, RedirectReason::NotAdmin);
            }
            assert_eq!(guard.state().await, GuardState::Unauthenticated);
        }
    }

    #[tokio::test]
    async fn test_admin_renders_protected_views() {
        let (store, guard) = make_guard();
        store
            .save_session("tok", &SessionUser::new(UserRole::Admin))
            .await
            .unwrap();

        for path in ALL_PROTECTED {
            let nav = guard.navigate(path).await;
            match nav {
                Navigation::Protected { route, session } => {
                    assert_eq!(route.path(), path);
                    assert_eq!(session.token, "tok");
                }
                other => panic!("expected protected view for {path}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_path_redirects_even_when_logged_in() {
        let (store, guard) = make_guard();
        store
            .save_session("tok", &SessionUser::new(UserRole::Admin))
            .await
            .unwrap();

        assert_redirect(guard.navigate("/reports").await, RedirectReason::UnknownRoute);
    }

    #[tokio::test]
    async fn test_login_path_is_public() {
        let (_, guard) = make_guard();
        assert_eq!(guard.navigate("/admin/login").await, Navigation::Login);
    }

    #[tokio::test]
    async fn test_clear_takes_effect_on_next_navigation() {
        let (store, guard) = make_guard();
        store
            .save_session("tok", &SessionUser::new(UserRole::Admin))
            .await
            .unwrap();
        assert!(guard.navigate("/fees").await.is_protected());

        store.clear_session().await.unwrap();
        assert_redirect(guard.navigate("/fees").await, RedirectReason::NoSession);
    }
}
