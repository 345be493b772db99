// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Batching of evaluation requests.

use std::ops::{Deref, DerefMut};

use super::ProcessorNetwork;

/// Scoped lock on a network. Dereferences to the network; unlocks on drop.
///
/// Locks nest. Evaluation requests raised while any lock is held are
/// collapsed into one request sent when the outermost lock is released.
pub struct NetworkLock<'a> {
    network: &'a mut ProcessorNetwork,
}

impl<'a> NetworkLock<'a> {
    pub(crate) fn new(network: &'a mut ProcessorNetwork) -> Self {
        network.lock();
        Self { network }
    }
}

impl Deref for NetworkLock<'_> {
    type Target = ProcessorNetwork;

    fn deref(&self) -> &Self::Target {
        self.network
    }
}

impl DerefMut for NetworkLock<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.network
    }
}

impl Drop for NetworkLock<'_> {
    fn drop(&mut self) {
        self.network.unlock();
    }
}

impl ProcessorNetwork {
    /// Lock the network until the returned guard is dropped.
    pub fn batch(&mut self) -> NetworkLock<'_> {
        NetworkLock::new(self)
    }

    pub fn lock(&mut self) {
        self.lock_depth += 1;
    }

    /// Release one lock level. Releasing the outermost lock sends the
    /// deferred evaluation request, if any. Extra unlocks are ignored.
    pub fn unlock(&mut self) {
        self.lock_depth = self.lock_depth.saturating_sub(1);
        if self.lock_depth == 0 && self.evaluation_pending {
            self.evaluation_pending = false;
            tracing::trace!("Network unlocked, sending deferred evaluation request");
            self.notify(|o| o.did_request_evaluation());
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock_depth > 0
    }

    /// Ask observers to evaluate, or defer while locked.
    pub(crate) fn request_evaluation(&mut self) {
        if self.is_locked() {
            self.evaluation_pending = true;
        } else {
            self.notify(|o| o.did_request_evaluation());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::delegates::NetworkObserver;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Requests(AtomicUsize);

    impl NetworkObserver for Requests {
        fn did_request_evaluation(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_nested_locks_defer_until_outermost() {
        let mut network = ProcessorNetwork::new();
        let requests = Arc::new(Requests::default());
        network.add_observer(requests.clone());

        {
            let mut outer = network.batch();
            outer.request_evaluation();
            {
                let mut inner = outer.batch();
                inner.request_evaluation();
                assert!(inner.is_locked());
            }
            assert!(outer.is_locked());
            assert_eq!(requests.0.load(Ordering::SeqCst), 0);
        }

        assert!(!network.is_locked());
        assert_eq!(requests.0.load(Ordering::SeqCst), 1);

        network.unlock();
        assert!(!network.is_locked());
        assert_eq!(requests.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unlock_without_request_is_silent() {
        let mut network = ProcessorNetwork::new();
        let requests = Arc::new(Requests::default());
        network.add_observer(requests.clone());

        drop(network.batch());
        assert_eq!(requests.0.load(Ordering::SeqCst), 0);
    }
}
