//! Key trait for node handles.
//!
//! A [`Key`] names a slot in the node arena. The `NONE` sentinel doubles as
//! the empty link: a node whose `next` is `NONE` is the tail, a chain whose
//! `head` is `NONE` is empty.

/// Trait for key types used to link chain nodes.
///
/// # Example
///
/// ```
/// use nexus_chain::Key;
///
/// let key: usize = 7;
/// assert!(key.is_some());
/// assert!(usize::NONE.is_none());
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing the empty link.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl Key for u32 {
    const NONE: Self = u32::MAX;
}

impl Key for usize {
    const NONE: Self = usize::MAX;
}
