// SPDX-License-Identifier: MPL-2.0
//! Store subscription that keeps the latest toast list for rendering.

use crate::toast::{Snapshot, Store, Unsubscribe};
use parking_lot::Mutex;
use std::sync::Arc;

/// Latest toast list of a store, refreshed by a subscription.
///
/// The subscription ends when the feed is dropped.
pub struct ToastFeed {
    latest: Arc<Mutex<Snapshot>>,
    subscription: Option<Unsubscribe>,
}

impl ToastFeed {
    /// Subscribes to `store`, seeded with its current toasts.
    pub fn new(store: &Store) -> Self {
        let latest = Arc::new(Mutex::new(store.toasts()));
        let sink = latest.clone();
        let subscription = store.subscribe(move |toasts| {
            *sink.lock() = Arc::from(toasts);
        });

        Self {
            latest,
            subscription: Some(subscription),
        }
    }

    /// Returns the most recent toast list, newest first.
    #[must_use]
    pub fn toasts(&self) -> Snapshot {
        self.latest.lock().clone()
    }
}

impl Drop for ToastFeed {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
