//! Error types for index-addressed operations.
//!
//! Only structural index operations fail with an error. Lookups, peeks and
//! pops report a miss as `None` instead.

use core::fmt;

/// An index fell outside the range an operation accepts.
///
/// For insertion the valid range is `0..=len`; for removal and replacement it
/// is `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} out of range for length {len}")]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// Length of the container at the time of the call.
    pub len: usize,
}

/// A value handed back because its index was out of range.
///
/// Returned by operations that consume a value, so the caller keeps
/// ownership when nothing was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected<T> {
    /// The value that was not stored.
    pub value: T,
    /// Why it was rejected.
    pub error: OutOfRange,
}

impl<T> Rejected<T> {
    /// Returns the value that could not be stored.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value rejected: {}", self.error)
    }
}

impl<T: fmt::Debug> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
