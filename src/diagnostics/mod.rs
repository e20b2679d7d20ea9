// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for store activity.
//!
//! A store with an attached [`DiagnosticsHandle`] records every transition
//! (added, dismissed, removed, evicted, timers armed and cancelled) as a
//! [`ToastEvent`]. The [`DiagnosticsCollector`] keeps the most recent events
//! in a memory-bounded [`CircularBuffer`] and exports them as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Ring buffer with configurable capacity
//! - [`DiagnosticsHandle`]: Non-blocking, cloneable event sender
//! - [`DiagnosticsCollector`]: Drains the channel and owns the buffer

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, SerializableEvent, ToastEvent};
