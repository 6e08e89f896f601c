//! Result alias used throughout the console crates.

use crate::error::AppError;

/// Convenience alias for results carrying an [`AppError`].
pub type AppResult<T> = Result<T, AppError>;
