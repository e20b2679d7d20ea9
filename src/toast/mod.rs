// SPDX-License-Identifier: MPL-2.0
//! Toast notification store.
//!
//! A framework-agnostic container for transient notifications. Callers add
//! toasts, renderers subscribe to the resulting list, and timers remove
//! toasts once they expire.
//!
//! # Components
//!
//! - [`id`] - Unique `ToastId` generation
//! - [`model`] - `Toast`, `Variant` and `ToastOptions`
//! - [`reducer`] - Pure `(state, action) -> state` transitions
//! - [`scheduler`] - Injectable one-shot timers (tokio or manual clock)
//! - [`store`] - State, subscribers and removal timers
//! - [`api`] - Process-wide store and free functions
//!
//! # Lifecycle
//!
//! ```text
//! toast() ──► open ──► dismiss() ──► closed (open = false) ──► removed
//!               └──────────── lifetime elapsed ───────────────────┘
//! ```
//!
//! Dismissal keeps the toast in the list with `open == false` so a renderer
//! can animate it out; the removal timer then drops it.

pub mod api;
pub mod id;
pub mod model;
pub mod reducer;
pub mod scheduler;
pub mod store;

pub use api::{
    diagnostics, dismiss, dismiss_all, global, install, subscribe, toast, toasts, update,
};
pub use id::{IdGenerator, ToastId};
pub use model::{Toast, ToastAction, ToastOptions, Variant};
pub use reducer::{reduce, Action};
pub use scheduler::{CancelFlag, ManualScheduler, Scheduler, Task, TimerHandle, TokioScheduler};
pub use store::{Listener, Snapshot, Store, ToastHandle, Unsubscribe};
