//! Capacity growth policy and accounting.
//!
//! Capacity grows geometrically so that appending `B` bytes over any number
//! of calls costs `O(B)` copying and `O(log B)` reallocations.

use serde::{Deserialize, Serialize};

/// Smallest non-zero capacity used when no option overrides it
pub const DEFAULT_MIN_GROWTH: usize = 8;

/// Construction options for a byte array.
///
/// Deserialisable so that hosts can load it from configuration; every field
/// falls back to its default when absent.
///
/// # Examples
///
/// ```
/// use bytearray::ByteArrayOptions;
///
/// let options = ByteArrayOptions::default()
///     .with_initial_capacity(64)
///     .with_max_length(Some(1024));
/// assert_eq!(options.initial_capacity, 64);
/// assert_eq!(options.max_length, Some(1024));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ByteArrayOptions {
    /// Capacity reserved at construction
    pub initial_capacity: usize,
    /// Smallest capacity allocated on first growth
    pub min_growth: usize,
    /// Hard limit on the length; `None` means unbounded
    pub max_length: Option<usize>,
}

impl Default for ByteArrayOptions {
    fn default() -> Self {
        ByteArrayOptions {
            initial_capacity: 0,
            min_growth: DEFAULT_MIN_GROWTH,
            max_length: None,
        }
    }
}

impl ByteArrayOptions {
    /// Set the capacity reserved at construction
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the smallest capacity allocated on first growth
    pub fn with_min_growth(mut self, min_growth: usize) -> Self {
        self.min_growth = min_growth;
        self
    }

    /// Set the hard length limit
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    /// Capacity to grow to when `required` bytes no longer fit in `capacity`.
    ///
    /// Doubles the current capacity, never going below `required` or
    /// `min_growth`, and never above `max_length`. Callers must have checked
    /// `required` against `max_length` already.
    pub fn growth_target(&self, capacity: usize, required: usize) -> usize {
        let target = capacity
            .saturating_mul(2)
            .max(required)
            .max(self.min_growth);
        match self.max_length {
            Some(max) => target.min(max).max(required),
            None => target,
        }
    }
}

/// Reallocation counters for one byte array store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GrowthStats {
    /// Number of times the store was reallocated to grow
    pub reallocations: usize,
    /// Bytes moved by those reallocations
    pub bytes_copied: usize,
}

impl GrowthStats {
    pub(crate) fn record(&mut self, moved: usize) {
        self.reallocations += 1;
        self.bytes_copied += moved;
    }
}
