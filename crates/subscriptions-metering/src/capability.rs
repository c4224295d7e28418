//! Orchestrator-side metering capability
//!
//! Owns the [`MeteringStore`] and the flag that suppresses a redundant
//! entitlement fetch under an unchanged metering state.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::store::MeteringStore;

#[derive(Debug)]
pub struct Metering {
    store: MeteringStore,
    /// Set once entitlements were fetched with the current metering state.
    /// Never reset automatically.
    entitlements_fetched: AtomicBool,
}

impl Metering {
    pub fn new(store: MeteringStore) -> Self {
        Self {
            store,
            entitlements_fetched: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &MeteringStore {
        &self.store
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_enabled()
    }

    pub fn mark_entitlements_fetched(&self) {
        self.entitlements_fetched.store(true, Ordering::SeqCst);
        debug!("Entitlements fetched with current metering state");
    }

    pub fn entitlements_were_fetched(&self) -> bool {
        self.entitlements_fetched.load(Ordering::SeqCst)
    }

    /// Must be called by anyone who changes the metering state
    pub fn clear_entitlements_fetched(&self) {
        self.entitlements_fetched.store(false, Ordering::SeqCst);
    }
}
