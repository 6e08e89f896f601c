//! User domain entities.

pub mod model;
pub mod role;

pub use model::SessionUser;
pub use role::UserRole;
