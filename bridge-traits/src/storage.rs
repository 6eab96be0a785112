//! Key-value storage bridge trait.
//!
//! A minimal string-valued store matching what the hosting platforms offer
//! for small persistent app state (browser local storage, a JSON settings
//! file on desktop). The account cache in `core-auth` is its main consumer.

use crate::error::Result;
use async_trait::async_trait;

/// Async string key-value store.
///
/// Values are opaque strings; callers layer their own serialization (the
/// core crates use JSON) on top. Implementations must be safe to share
/// across tasks.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value for `key`, or `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key in the store.
    async fn clear(&self) -> Result<()>;

    /// Whether `key` currently has a value.
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}
