//! Navigation-time session checks.

pub mod route;
pub mod route_guard;

pub use route::Route;
pub use route_guard::{GuardState, Navigation, RedirectReason, RouteGuard};
