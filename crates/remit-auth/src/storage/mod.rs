//! Durable key/value storage behind the session store.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

use remit_core::error::AppError;

/// String key/value storage that outlives the process.
///
/// Every console process of the same user shares one store. There is no
/// locking across processes: the last writer wins.
#[async_trait]
pub trait DurableStorage: Send + Sync + std::fmt::Debug {
    /// Read a key.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Write a key.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove a key. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}
