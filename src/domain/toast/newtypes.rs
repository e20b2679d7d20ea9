// SPDX-License-Identifier: MPL-2.0
//! Toast store newtypes.
//!
//! This module provides type-safe wrappers for the store's settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Toast limit bounds (1 to 20 toasts).
pub mod limit_bounds {
    /// Minimum number of retained toasts.
    pub const MIN: usize = 1;
    /// Maximum number of retained toasts.
    pub const MAX: usize = 20;
    /// Default number of retained toasts.
    pub const DEFAULT: usize = 3;
}

/// Toast lifetime bounds in milliseconds (0.5s to 2min).
pub mod toast_duration_bounds {
    /// Minimum lifetime.
    pub const MIN: u64 = 500;
    /// Maximum lifetime.
    pub const MAX: u64 = 120_000;
    /// Default lifetime.
    pub const DEFAULT: u64 = 5_000;
}

/// Remove delay bounds in milliseconds (0 to 10s).
pub mod remove_delay_bounds {
    /// Minimum delay.
    pub const MIN: u64 = 0;
    /// Maximum delay.
    pub const MAX: u64 = 10_000;
    /// Default delay.
    pub const DEFAULT: u64 = 1_000;
}

// =============================================================================
// ToastLimit
// =============================================================================

/// Maximum number of toasts the store retains at once.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–20 toasts).
///
/// # Example
///
/// ```
/// use toast_store::domain::toast::ToastLimit;
///
/// let limit = ToastLimit::new(3);
/// assert_eq!(limit.value(), 3);
///
/// // Values outside range are clamped
/// assert_eq!(ToastLimit::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastLimit(usize);

impl ToastLimit {
    /// Creates a new limit, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(limit_bounds::MIN, limit_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for ToastLimit {
    fn default() -> Self {
        Self(limit_bounds::DEFAULT)
    }
}

// =============================================================================
// ToastDuration
// =============================================================================

/// How long a toast lives before its removal timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// Creates a new lifetime in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(toast_duration_bounds::MIN, toast_duration_bounds::MAX))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the lifetime as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(toast_duration_bounds::DEFAULT)
    }
}

// =============================================================================
// RemoveDelay
// =============================================================================

/// Time between a dismissal and the removal of the toast from the store.
///
/// Renderers use this window to play an exit transition while the toast
/// is still present with `open == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveDelay(u64);

impl RemoveDelay {
    /// Creates a new delay in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(remove_delay_bounds::MIN, remove_delay_bounds::MAX))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RemoveDelay {
    fn default() -> Self {
        Self(remove_delay_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_clamps_to_valid_range() {
        assert_eq!(ToastLimit::new(0).value(), limit_bounds::MIN);
        assert_eq!(ToastLimit::new(500).value(), limit_bounds::MAX);
    }

    #[test]
    fn limit_accepts_valid_values() {
        assert_eq!(ToastLimit::new(1).value(), 1);
        assert_eq!(ToastLimit::new(7).value(), 7);
        assert_eq!(ToastLimit::new(20).value(), 20);
    }

    #[test]
    fn limit_default() {
        assert_eq!(ToastLimit::default().value(), limit_bounds::DEFAULT);
    }

    #[test]
    fn duration_clamps_to_valid_range() {
        assert_eq!(
            ToastDuration::from_millis(0).as_millis(),
            toast_duration_bounds::MIN
        );
        assert_eq!(
            ToastDuration::from_millis(u64::MAX).as_millis(),
            toast_duration_bounds::MAX
        );
    }

    #[test]
    fn duration_converts_to_std_duration() {
        assert_eq!(
            ToastDuration::from_millis(2_500).as_duration(),
            Duration::from_millis(2_500)
        );
    }

    #[test]
    fn remove_delay_accepts_zero() {
        assert_eq!(RemoveDelay::from_millis(0).as_duration(), Duration::ZERO);
    }

    #[test]
    fn remove_delay_clamps_to_max() {
        assert_eq!(
            RemoveDelay::from_millis(60_000).as_millis(),
            remove_delay_bounds::MAX
        );
    }

    #[test]
    fn defaults_are_within_bounds() {
        let duration = ToastDuration::default().as_millis();
        assert!((toast_duration_bounds::MIN..=toast_duration_bounds::MAX).contains(&duration));

        let delay = RemoveDelay::default().as_millis();
        assert!((remove_delay_bounds::MIN..=remove_delay_bounds::MAX).contains(&delay));
    }
}
