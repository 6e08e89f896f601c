//! # remit-auth
//!
//! Session and navigation gating for the Remit admin console:
//!
//! - [`DurableStorage`] abstraction with file-backed and in-memory stores
//! - [`SessionStore`] persisting the token and user record under two keys
//! - [`RouteGuard`] re-evaluating the session on every navigation
//! - [`SessionManager`] running the admin-only login flow

pub mod guard;
pub mod session;
pub mod storage;

pub use guard::{Navigation, RedirectReason, Route, RouteGuard};
pub use session::{SessionManager, SessionStore};
pub use storage::{DurableStorage, FileStorage, MemoryStorage};
