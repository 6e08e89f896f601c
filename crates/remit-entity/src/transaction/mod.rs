//! Transaction value objects used by notifications.

pub mod amount;
pub mod status;

pub use amount::Amount;
pub use status::{Severity, TransactionStatus};
