// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

/// Event buffer bounds (50 to 10000 events).
pub mod buffer_capacity_bounds {
    /// Smallest buffer that still covers a few bursts of toast activity.
    pub const MIN: usize = 50;
    /// Largest buffer.
    pub const MAX: usize = 10_000;
    /// Default buffer size.
    pub const DEFAULT: usize = 500;
}

/// Number of store events the diagnostics collector keeps in memory.
///
/// Out-of-range values are clamped, so a collector can never be created
/// with an empty or unbounded buffer.
///
/// ```
/// use toast_store::domain::diagnostics::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(10).value(), 50);
/// assert_eq!(BufferCapacity::new(800).value(), 800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_clamps_both_ends() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(1_000_000).value(),
            buffer_capacity_bounds::MAX
        );
    }

    #[test]
    fn capacity_default_matches_bounds() {
        assert_eq!(
            BufferCapacity::default().value(),
            buffer_capacity_bounds::DEFAULT
        );
    }
}
