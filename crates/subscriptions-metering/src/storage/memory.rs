//! In-memory storage implementation
//!
//! Backs a single document scope with a DashMap. Used for tests and for
//! hosts without durable storage.

use async_trait::async_trait;
use dashmap::DashMap;
use subscriptions_common::StorageError;

use super::KeyValueStorage;

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    values: DashMap<String, String>,
    /// Largest value accepted by `set`, if bounded
    max_value_len: Option<usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes larger than `max_value_len` bytes
    pub fn with_quota(max_value_len: usize) -> Self {
        Self {
            values: DashMap::new(),
            max_value_len: Some(max_value_len),
        }
    }

    /// Write a raw value, bypassing quota checks
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Read a raw value
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|v| v.clone())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        if let Some(max) = self.max_value_len {
            if value.len() > max {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    len: value.len(),
                });
            }
        }

        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
