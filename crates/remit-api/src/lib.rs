//! # remit-api
//!
//! HTTP client for the back-office REST API:
//!
//! - `POST` login with `{credential, password}`
//! - A uniform list/create/update/delete contract over every business
//!   resource (transactions, countries, currencies, rates, fees, payment
//!   and receiving methods, users)
//!
//! Payloads are opaque JSON values; their shapes belong to the screens.

pub mod auth;
pub mod client;
pub mod error;
pub mod resource;

pub use auth::{LoginRequest, LoginResponse};
pub use client::ApiClient;
pub use resource::{ResourceKind, UpdateMethod};
