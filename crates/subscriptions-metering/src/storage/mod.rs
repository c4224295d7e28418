//! Storage capability boundary
//!
//! The key-value store is supplied by the host and scoped to one document.

pub mod memory;

use async_trait::async_trait;
use subscriptions_common::{StorageError, DEFAULT_METERING_STORAGE_KEY, METERING_STORE_SUFFIX};

/// Asynchronous string key-value storage for a single document scope
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Key under which a metering store persists its state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageScope {
    key: String,
}

impl StorageScope {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// `"<namespace>:metering-store"`
    pub fn namespaced(namespace: &str) -> Self {
        Self::new(format!("{}:{}", namespace, METERING_STORE_SUFFIX))
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for StorageScope {
    fn default() -> Self {
        Self::new(DEFAULT_METERING_STORAGE_KEY)
    }
}
