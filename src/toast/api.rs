// SPDX-License-Identifier: MPL-2.0
//! Process-wide toast store and free-function API.
//!
//! Application code calls [`toast`] and [`dismiss`] from anywhere; they act
//! on a single store created on first use. Install a custom store with
//! [`install`] before that first use to choose settings or a scheduler.
//! A store created on first use records its activity into a collector
//! sized by the `[diagnostics]` config section, reachable through
//! [`diagnostics`].
//! Tests isolate themselves with [`Store::reset`].
//!
//! ```no_run
//! use toast_store::toast::{self, ToastOptions};
//!
//! let handle = toast::toast(ToastOptions::success("Recipe saved"));
//! handle.update(ToastOptions::new().description("Shared with 3 people"));
//! ```

use super::id::ToastId;
use super::model::{Toast, ToastOptions};
use super::scheduler::{ManualScheduler, TokioScheduler};
use super::store::{Snapshot, Store, ToastHandle, Unsubscribe};
use crate::config::{self, Settings};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Store> = OnceLock::new();
static DIAGNOSTICS: OnceLock<Mutex<DiagnosticsCollector>> = OnceLock::new();

/// Makes `store` the process-wide store.
///
/// # Errors
///
/// Returns [`Error::AlreadyInstalled`] if a store was installed or created
/// by an earlier call.
pub fn install(store: Store) -> Result<()> {
    GLOBAL.set(store).map_err(|_| Error::AlreadyInstalled)
}

/// Returns the process-wide store, creating it from the user's config file
/// on first use.
pub fn global() -> &'static Store {
    GLOBAL.get_or_init(default_store)
}

fn default_store() -> Store {
    let (config, warning) = config::load();
    if let Some(key) = warning {
        eprintln!("[WARN] {key}: using default toast settings");
    }
    let settings = Settings::from(&config);

    // Own a runtime so timers survive whichever runtime first touched the store.
    let store = match TokioScheduler::dedicated() {
        Ok(scheduler) => Store::new(settings, Arc::new(scheduler)),
        Err(err) => {
            eprintln!("[WARN] {err}: toasts will not expire on their own");
            Store::new(settings, Arc::new(ManualScheduler::new()))
        }
    };

    let collector = DiagnosticsCollector::new(BufferCapacity::from(&config));
    store.set_diagnostics(collector.handle());
    // Only reached from `global`'s one-time init.
    let _ = DIAGNOSTICS.set(Mutex::new(collector));

    store
}

/// Returns the collector attached to the process-wide store.
///
/// `None` until [`global`] has created the store, and always `None` when
/// the store came from [`install`].
pub fn diagnostics() -> Option<&'static Mutex<DiagnosticsCollector>> {
    DIAGNOSTICS.get()
}

/// Shows a toast on the process-wide store.
pub fn toast(options: ToastOptions) -> ToastHandle {
    global().toast(options)
}

/// Dismisses one toast on the process-wide store.
pub fn dismiss(id: ToastId) {
    global().dismiss(id);
}

/// Dismisses every toast on the process-wide store.
pub fn dismiss_all() {
    global().dismiss_all();
}

/// Patches one toast on the process-wide store.
pub fn update(id: ToastId, options: ToastOptions) {
    global().update(id, options);
}

/// Subscribes to the process-wide store.
pub fn subscribe<F>(listener: F) -> Unsubscribe
where
    F: Fn(&[Toast]) + Send + Sync + 'static,
{
    global().subscribe(listener)
}

/// Returns the process-wide toasts, newest first.
pub fn toasts() -> Snapshot {
    global().toasts()
}
