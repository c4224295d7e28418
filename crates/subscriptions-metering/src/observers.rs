//! Save-observer registry
//!
//! Ordered list of callbacks fired after each successful metering save.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use subscriptions_common::MeteringState;

/// Callback invoked with the state that was just saved
pub type SaveObserver = Arc<dyn Fn(&MeteringState) + Send + Sync>;

/// Identifies one registration, for later removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: AtomicU64,
    observers: RwLock<Vec<(ObserverHandle, SaveObserver)>>,
}

impl ObserverRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append an observer. The same callback may be registered more than once.
    pub(crate) fn register(&self, observer: SaveObserver) -> ObserverHandle {
        let handle = ObserverHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((handle, observer));
        handle
    }

    pub(crate) fn remove(&self, handle: ObserverHandle) -> bool {
        let mut observers = self.observers.write();
        match observers.iter().position(|(h, _)| *h == handle) {
            Some(idx) => {
                observers.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.read().len()
    }

    /// Invoke every observer in registration order.
    ///
    /// Runs over a snapshot so observers may (un)register without deadlocking;
    /// such changes apply from the next notification.
    pub(crate) fn notify(&self, state: &MeteringState) -> usize {
        let snapshot: Vec<SaveObserver> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in &snapshot {
            observer(state);
        }
        snapshot.len()
    }
}
