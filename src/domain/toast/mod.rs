// SPDX-License-Identifier: MPL-2.0
//! Toast store domain types.
//!
//! These value objects bound the store's tunables so a hand-edited config
//! file can never produce a zero-sized store or an unbounded timer.

pub mod newtypes;

pub use newtypes::{
    limit_bounds, remove_delay_bounds, toast_duration_bounds, RemoveDelay, ToastDuration,
    ToastLimit,
};
