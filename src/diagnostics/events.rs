// SPDX-License-Identifier: MPL-2.0
//! Store activity events.

use crate::toast::{ToastId, Variant};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A store event with the moment it was recorded.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    pub kind: ToastEvent,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: ToastEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// What happened in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEvent {
    Added { id: ToastId, variant: Variant },
    Updated { id: ToastId },
    Dismissed { id: ToastId },
    DismissedAll { count: usize },
    Removed { id: ToastId },
    RemovedAll { count: usize },
    /// Pushed out by a newer toast while the store was at its limit.
    Evicted { id: ToastId },
    RemovalScheduled { id: ToastId, delay_ms: u64 },
    RemovalCancelled { id: ToastId },
}


/// Event as written to a JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: ToastEvent,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(event: &DiagnosticEvent, collection_start: Instant) -> Self {
        Self {
            timestamp_ms: event
                .timestamp
                .saturating_duration_since(collection_start)
                .as_millis() as u64,
            kind: event.kind.clone(),
        }
    }
}
