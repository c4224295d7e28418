//! # Subscriptions Common
//!
//! Shared types, errors, and telemetry for the subscription metering subsystem.
//!
//! ## Core Types
//!
//! - [`MeteringState`]: persisted record of metering signals for one publication
//! - [`MeteringAttribute`]: a single named, timestamped metering signal
//! - [`Entitlement`]: grant resolved by a local or remote platform
//! - [`PageConfig`]: publication/product configuration of the current page
//!
//! ## Errors
//!
//! - [`SubscriptionsError`]: unified error for facade and orchestrator operations
//! - [`StorageError`]: failures at the key-value storage boundary

pub mod error;
pub mod telemetry;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{Result, StorageError, SubscriptionsError};
pub use types::{
    metering_state::{MeteringAttribute, MeteringState},
    platform::{ActionElement, Entitlement, GrantReason, PageConfig, ScoreFactorStates},
};

/// Storage key under which the serialized metering state lives
pub const DEFAULT_METERING_STORAGE_KEY: &str = "amp-subscriptions:metering-store";

/// Suffix appended to a namespace to build a metering storage key
pub const METERING_STORE_SUFFIX: &str = "metering-store";

/// Reserved platform key for the publisher's own site
pub const LOCAL_PLATFORM_KEY: &str = "local";
