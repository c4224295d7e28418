//! # Subscriptions Metering
//!
//! Persists and restores the reader's metering state across visits.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Metering                     │
//! │   (orchestrator capability + fetched flag)   │
//! │  ┌────────────────────────────────────────┐  │
//! │  │             MeteringStore              │  │
//! │  │  enabled gate · JSON codec · observers │  │
//! │  └───────────────────┬────────────────────┘  │
//! └──────────────────────┼───────────────────────┘
//!                        │ StorageScope key
//!              ┌─────────┴──────────┐
//!              │  KeyValueStorage   │
//!              └────────────────────┘
//! ```
//!
//! Persistence is best-effort: storage and codec failures are logged and
//! swallowed so metering can never break the reading experience.

pub mod capability;
pub mod config;
pub mod observers;
pub mod storage;
pub mod store;

pub use capability::Metering;
pub use config::MeteringConfig;
pub use observers::{ObserverHandle, SaveObserver};
pub use storage::{memory::InMemoryStorage, KeyValueStorage, StorageScope};
pub use store::MeteringStore;
