//! Error types for the subscriptions subsystem
//!
//! Provides a unified error type and the storage-boundary error

use thiserror::Error;

/// Result type alias using SubscriptionsError
pub type Result<T> = std::result::Result<T, SubscriptionsError>;

/// Unified error type for subscription operations
#[derive(Debug, Error)]
pub enum SubscriptionsError {
    // Storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Metering capability missing on the orchestrator
    #[error("Metering is not available for this document")]
    MeteringUnavailable,

    // Platform errors
    #[error("Platform error ({platform_key}): {reason}")]
    Platform { platform_key: String, reason: String },

    // Unknown platform key
    #[error("Platform not found: {0}")]
    PlatformNotFound(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors from the key-value storage capability
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Quota exceeded writing {len} bytes to {key}")]
    QuotaExceeded { key: String, len: usize },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for SubscriptionsError {
    fn from(err: serde_json::Error) -> Self {
        SubscriptionsError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for SubscriptionsError {
    fn from(err: anyhow::Error) -> Self {
        SubscriptionsError::Internal(err.to_string())
    }
}
