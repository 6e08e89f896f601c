//! # remit-core
//!
//! Shared foundation for the Remit admin console crates:
//!
//! - Layered configuration (`config/default.toml`, environment overlay, `REMIT__*` variables)
//! - The unified [`AppError`] type and its [`ErrorKind`] taxonomy
//! - The [`AppResult`] alias used across every crate boundary

pub mod config;
pub mod error;
pub mod result;

pub use config::AppConfig;
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
