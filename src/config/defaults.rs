// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Limit**: Maximum number of toasts retained at once
//! - **Duration**: How long a toast stays before it is removed
//! - **Remove Delay**: Exit-transition time between dismissal and removal
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Limit Defaults
// ==========================================================================

/// Default number of toasts retained at once.
pub const DEFAULT_TOAST_LIMIT: usize = 3;

/// Minimum toast limit.
pub const MIN_TOAST_LIMIT: usize = 1;

/// Maximum toast limit.
pub const MAX_TOAST_LIMIT: usize = 20;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default lifetime of a toast before its removal timer fires (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

/// Minimum toast lifetime (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Maximum toast lifetime (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 120_000;

// ==========================================================================
// Remove Delay Defaults
// ==========================================================================

/// Default delay between dismissal and removal (in milliseconds).
pub const DEFAULT_REMOVE_DELAY_MS: u64 = 1_000;

/// Minimum remove delay (in milliseconds). Zero removes on the next timer turn.
pub const MIN_REMOVE_DELAY_MS: u64 = 0;

/// Maximum remove delay (in milliseconds).
pub const MAX_REMOVE_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 50;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_LIMIT >= 1);
    assert!(DEFAULT_TOAST_LIMIT >= MIN_TOAST_LIMIT);
    assert!(DEFAULT_TOAST_LIMIT <= MAX_TOAST_LIMIT);

    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);

    assert!(DEFAULT_REMOVE_DELAY_MS >= MIN_REMOVE_DELAY_MS);
    assert!(DEFAULT_REMOVE_DELAY_MS <= MAX_REMOVE_DELAY_MS);

    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
