// SPDX-License-Identifier: MPL-2.0
//! Toast store: current state, subscribers and removal timers.
//!
//! Every mutation goes through [`Store::dispatch`], which applies the
//! reducer and then synchronously notifies subscribers with the new
//! snapshot. Dispatches are serialized; a listener may itself dispatch,
//! in which case the nested notification completes before the outer one
//! resumes.
//!
//! # Timers
//!
//! Each toast has at most one armed removal timer. Arming a timer for an
//! id that already has one leaves the existing timer in place. Removing
//! or evicting a toast cancels its timer, and a timer that lost its slot
//! never dispatches.

use super::id::{IdGenerator, ToastId};
use super::model::{Toast, ToastOptions};
use super::reducer::{reduce, Action};
use super::scheduler::{Scheduler, TimerHandle};
use crate::config::Settings;
use crate::diagnostics::{DiagnosticsHandle, ToastEvent};
use parking_lot::{Mutex, ReentrantMutex};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Callback receiving the full toast list after every change.
pub type Listener = Arc<dyn Fn(&[Toast]) + Send + Sync>;

/// Shared, immutable view of the toast list.
pub type Snapshot = Arc<[Toast]>;

/// Handle to a toast store. Clones share the same state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

struct Inner {
    settings: Settings,
    scheduler: Arc<dyn Scheduler>,
    ids: IdGenerator,
    /// Serializes dispatches across threads while letting listeners re-enter.
    dispatch_lock: ReentrantMutex<()>,
    state: Mutex<Snapshot>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener: AtomicU64,
    timers: Mutex<HashMap<ToastId, ArmedTimer>>,
    next_timer: AtomicU64,
    diagnostics: Mutex<Option<DiagnosticsHandle>>,
}

struct ArmedTimer {
    seq: u64,
    handle: TimerHandle,
}

impl Store {
    /// Creates an empty store driven by `scheduler`.
    pub fn new(settings: Settings, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            inner: Arc::new(Inner {
                settings,
                scheduler,
                ids: IdGenerator::new(),
                dispatch_lock: ReentrantMutex::new(()),
                state: Mutex::new(Arc::from(Vec::new())),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(0),
                timers: Mutex::new(HashMap::new()),
                next_timer: AtomicU64::new(0),
                diagnostics: Mutex::new(None),
            }),
        }
    }

    /// Sets the diagnostics handle used to record store activity.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        *self.inner.diagnostics.lock() = Some(handle);
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.inner.settings
    }

    /// Returns the current toasts, newest first.
    #[must_use]
    pub fn toasts(&self) -> Snapshot {
        self.inner.state.lock().clone()
    }

    /// Returns a copy of the toast with the given id, if held.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.inner
            .state
            .lock()
            .iter()
            .find(|toast| toast.id() == id)
            .cloned()
    }

    /// Returns the number of armed removal timers.
    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.inner.timers.lock().len()
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Registers a listener called with the full toast list after every dispatch.
    ///
    /// Listeners run in subscription order. A notification works on the
    /// listener list as it was when the dispatch started, so subscribing or
    /// unsubscribing from inside a listener takes effect on the next dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn(&[Toast]) + Send + Sync + 'static,
    {
        let key = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        let listener: Listener = Arc::new(listener);
        self.inner.listeners.lock().push((key, listener));

        Unsubscribe {
            store: Arc::downgrade(&self.inner),
            key,
        }
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Applies `action` and notifies every subscriber with the new state.
    ///
    /// Subscribers are notified even when the action changed nothing.
    pub fn dispatch(&self, action: Action) {
        let _serial = self.inner.dispatch_lock.lock();
        let limit = self.inner.settings.limit;

        let (previous, evicted) = {
            let mut state = self.inner.state.lock();
            let evicted = action.evicted(&state, limit);
            let next: Snapshot = reduce(&state, &action, limit).into();
            let previous = std::mem::replace(&mut *state, next);
            (previous, evicted)
        };

        match &action {
            Action::Remove(id) => self.cancel_removal(*id),
            Action::RemoveAll => self.cancel_all_removals(),
            _ => {}
        }
        for id in &evicted {
            self.cancel_removal(*id);
        }

        self.log_transition(&action, &previous, &evicted);
        self.notify();
    }

    /// Calls every listener with the live state.
    ///
    /// The state is read again before each call: a listener that dispatches
    /// has already moved it on, and later listeners must not see the older list.
    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            let snapshot = self.toasts();
            listener(&snapshot);
        }
    }

    fn log_transition(&self, action: &Action, previous: &[Toast], evicted: &[ToastId]) {
        let Some(handle) = self.inner.diagnostics.lock().clone() else {
            return;
        };

        let event = match action {
            Action::Add(toast) => ToastEvent::Added {
                id: toast.id(),
                variant: toast.variant(),
            },
            Action::Update(id, _) => ToastEvent::Updated { id: *id },
            Action::Dismiss(id) => ToastEvent::Dismissed { id: *id },
            Action::DismissAll => ToastEvent::DismissedAll {
                count: previous.len(),
            },
            Action::Remove(id) => ToastEvent::Removed { id: *id },
            Action::RemoveAll => ToastEvent::RemovedAll {
                count: previous.len(),
            },
        };
        handle.log(event);

        for id in evicted {
            handle.log(ToastEvent::Evicted { id: *id });
        }
    }

    fn log(&self, event: ToastEvent) {
        if let Some(handle) = self.inner.diagnostics.lock().as_ref() {
            handle.log(event);
        }
    }

    // =========================================================================
    // Removal Timers
    // =========================================================================

    /// Arms a timer that removes `id` after `delay`.
    ///
    /// Does nothing if a removal is already armed for `id`.
    pub fn schedule_removal(&self, id: ToastId, delay: Duration) {
        let mut timers = self.inner.timers.lock();
        if timers.contains_key(&id) {
            return;
        }

        let seq = self.inner.next_timer.fetch_add(1, Ordering::Relaxed);
        let store = Arc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(inner) = store.upgrade() {
                    Store { inner }.fire_removal(id, seq);
                }
            }),
        );

        timers.insert(id, ArmedTimer { seq, handle });
        drop(timers);

        #[allow(clippy::cast_possible_truncation)] // Delays are bounded by config
        self.log(ToastEvent::RemovalScheduled {
            id,
            delay_ms: delay.as_millis() as u64,
        });
    }

    /// Cancels the pending removal of `id`, if any.
    pub fn cancel_removal(&self, id: ToastId) {
        let armed = self.inner.timers.lock().remove(&id);
        if let Some(armed) = armed {
            armed.handle.cancel();
            self.log(ToastEvent::RemovalCancelled { id });
        }
    }

    fn cancel_all_removals(&self) {
        let armed: Vec<(ToastId, ArmedTimer)> = self.inner.timers.lock().drain().collect();
        for (id, timer) in armed {
            timer.handle.cancel();
            self.log(ToastEvent::RemovalCancelled { id });
        }
    }

    fn fire_removal(&self, id: ToastId, seq: u64) {
        {
            let mut timers = self.inner.timers.lock();
            match timers.get(&id) {
                Some(armed) if armed.seq == seq => {
                    timers.remove(&id);
                }
                // Cancelled or replaced since this timer was armed.
                _ => return,
            }
        }
        self.dispatch(Action::Remove(id));
    }

    // =========================================================================
    // Toast API
    // =========================================================================

    /// Adds an open toast and arms its removal after its lifetime.
    ///
    /// The lifetime is `options.duration` or the configured default.
    pub fn toast(&self, options: ToastOptions) -> ToastHandle {
        let id = self.inner.ids.next();
        let lifetime = options
            .duration
            .unwrap_or_else(|| self.inner.settings.duration.as_duration());

        self.dispatch(Action::Add(Toast::open_with(id, options)));
        // A listener may already have removed it.
        if self.get(id).is_some() {
            self.schedule_removal(id, lifetime);
        }

        ToastHandle {
            store: self.clone(),
            id,
        }
    }

    /// Merges the set fields of `options` into toast `id`.
    pub fn update(&self, id: ToastId, options: ToastOptions) {
        self.dispatch(Action::Update(id, options));
    }

    /// Closes toast `id` and arms its removal after the remove delay,
    /// unless a removal is already armed.
    pub fn dismiss(&self, id: ToastId) {
        self.dispatch(Action::Dismiss(id));
        if self.get(id).is_some() {
            self.schedule_removal(id, self.inner.settings.remove_delay.as_duration());
        }
    }

    /// Closes every toast and arms removals the same way as [`dismiss`](Self::dismiss).
    pub fn dismiss_all(&self) {
        self.dispatch(Action::DismissAll);
        let delay = self.inner.settings.remove_delay.as_duration();
        for toast in self.toasts().iter() {
            self.schedule_removal(toast.id(), delay);
        }
    }

    /// Drops toast `id` immediately.
    pub fn remove(&self, id: ToastId) {
        self.dispatch(Action::Remove(id));
    }

    /// Drops every toast immediately.
    pub fn remove_all(&self) {
        self.dispatch(Action::RemoveAll);
    }

    /// Cancels every timer and clears the collection.
    ///
    /// Subscribers stay registered and are notified of the empty state.
    pub fn reset(&self) {
        self.cancel_all_removals();
        self.dispatch(Action::RemoveAll);
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("settings", &self.inner.settings)
            .field("toasts", &self.inner.state.lock().len())
            .field("listeners", &self.inner.listeners.lock().len())
            .field("pending_removals", &self.inner.timers.lock().len())
            .finish_non_exhaustive()
    }
}

/// Removes a listener registered with [`Store::subscribe`].
///
/// Dropping it without calling [`unsubscribe`](Self::unsubscribe) keeps the
/// listener registered for the lifetime of the store.
#[must_use = "keep the handle to unsubscribe the listener later"]
#[derive(Debug)]
pub struct Unsubscribe {
    store: Weak<Inner>,
    key: u64,
}

impl Unsubscribe {
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.lock().retain(|(key, _)| *key != self.key);
        }
    }
}

/// Controls a single toast created with [`Store::toast`].
#[derive(Debug, Clone)]
pub struct ToastHandle {
    store: Store,
    id: ToastId,
}

impl ToastHandle {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn dismiss(&self) {
        self.store.dismiss(self.id);
    }

    pub fn update(&self, options: ToastOptions) {
        self.store.update(self.id, options);
    }

    /// Open-state callback for renderers. Closing dismisses the toast;
    /// reopening is ignored.
    pub fn on_open_change(&self, open: bool) {
        if !open {
            self.dismiss();
        }
    }
}
