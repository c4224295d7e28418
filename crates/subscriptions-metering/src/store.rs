//! Metering store
//!
//! Best-effort cache of one [`MeteringState`] under a fixed storage key.
//! Neither `save` nor `load` ever fails the caller: storage and codec
//! errors are logged as warnings and degrade to "no metering state".

use std::sync::Arc;

use subscriptions_common::{MeteringState, Result};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::config::MeteringConfig;
use crate::observers::{ObserverHandle, ObserverRegistry};
use crate::storage::{KeyValueStorage, StorageScope};

pub struct MeteringStore {
    storage: Arc<dyn KeyValueStorage>,
    scope: StorageScope,
    /// Fixed at construction; when false every operation is a no-op
    enabled: bool,
    observers: ObserverRegistry,
    /// Serializes write + notify so concurrent saves never interleave
    save_lock: Mutex<()>,
}

impl MeteringStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, scope: StorageScope, enabled: bool) -> Self {
        Self {
            storage,
            scope,
            enabled,
            observers: ObserverRegistry::new(),
            save_lock: Mutex::new(()),
        }
    }

    pub fn from_config(storage: Arc<dyn KeyValueStorage>, config: &MeteringConfig) -> Self {
        Self::new(
            storage,
            StorageScope::new(config.storage_key.clone()),
            config.enabled,
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn scope(&self) -> &StorageScope {
        &self.scope
    }

    /// Persist `state`, replacing whatever was stored before.
    ///
    /// Observers run only after the write succeeds, in registration order.
    /// A panicking observer propagates to the caller.
    #[instrument(skip_all, fields(key = %self.scope.key(), id = %state.id))]
    pub async fn save(&self, state: &MeteringState) {
        if !self.enabled {
            debug!("Metering disabled, skipping save");
            return;
        }

        let _guard = self.save_lock.lock().await;

        match self.write(state).await {
            Ok(()) => {
                let notified = self.observers.notify(state);
                debug!(notified, "Saved metering state");
            }
            Err(err) => {
                warn!(error = %err, "Failed to save metering state");
            }
        }
    }

    /// Restore the persisted state.
    ///
    /// `None` when disabled, never written, or unreadable.
    #[instrument(skip_all, fields(key = %self.scope.key()))]
    pub async fn load(&self) -> Option<MeteringState> {
        if !self.enabled {
            return None;
        }

        match self.read().await {
            Ok(Some(state)) => {
                debug!(id = %state.id, attributes = state.attributes.len(), "Loaded metering state");
                Some(state)
            }
            Ok(None) => {
                debug!("No metering state stored");
                None
            }
            Err(err) => {
                warn!(error = %err, "Failed to load metering state");
                None
            }
        }
    }

    /// Register a callback fired after every successful save.
    ///
    /// No uniqueness check: registering the same callback twice fires it twice.
    pub fn on_save<F>(&self, callback: F) -> ObserverHandle
    where
        F: Fn(&MeteringState) + Send + Sync + 'static,
    {
        self.observers.register(Arc::new(callback))
    }

    /// Unregister one observer. Returns false if the handle was already removed.
    pub fn remove_observer(&self, handle: ObserverHandle) -> bool {
        self.observers.remove(handle)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    async fn write(&self, state: &MeteringState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.storage.set(self.scope.key(), json).await?;
        Ok(())
    }

    async fn read(&self) -> Result<Option<MeteringState>> {
        let raw = self.storage.get(self.scope.key()).await?;

        match raw.as_deref() {
            None | Some("") => Ok(None),
            // A stored `null` decodes to None as well
            Some(json) => Ok(serde_json::from_str::<Option<MeteringState>>(json)?),
        }
    }
}

impl std::fmt::Debug for MeteringStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeteringStore")
            .field("scope", &self.scope)
            .field("enabled", &self.enabled)
            .field("observers", &self.observers.len())
            .finish()
    }
}
