//! # In-Flight Operation Guard
//!
//! Suppresses duplicate submissions from the same control while an operation
//! is running. A second submission for the same key is refused until the
//! first one's guard drops; nothing is cancelled.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

/// Tracks operation keys currently in flight.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl InFlight {
    /// Try to begin an operation. Returns `None` if the key is already in
    /// flight; otherwise a guard that releases the key on drop.
    #[must_use]
    pub fn begin(&self, key: &str) -> Option<InFlightGuard> {
        let mut keys = self.inner.lock().expect("inflight lock poisoned");
        if !keys.insert(key.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            key:   key.to_string(),
            inner: Arc::clone(&self.inner),
        })
    }

    /// Whether an operation with this key is currently running.
    #[must_use]
    pub fn is_running(&self, key: &str) -> bool {
        self.inner
            .lock()
            .expect("inflight lock poisoned")
            .contains(key)
    }
}

/// Releases the operation key when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    key:   String,
    inner: Arc<Mutex<HashSet<String>>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut keys = self.inner.lock().expect("inflight lock poisoned");
        keys.remove(&self.key);
    }
}
