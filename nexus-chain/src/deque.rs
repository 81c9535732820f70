//! Double-ended queue.
//!
//! [`Deque`] restricts the chain to its two ends. Every operation is O(1);
//! there is no indexed access.

use std::fmt;

use crate::iter::{IntoIter, Iter};
use crate::Chain;

/// A double-ended queue over a doubly-linked chain.
///
/// Removing or peeking on an empty deque returns `None`.
///
/// # Example
///
/// ```
/// use nexus_chain::Deque;
///
/// let mut deque: Deque<u64> = Deque::new();
/// deque.add_last(1);
/// deque.add_first(2);
/// deque.add_last(3);
///
/// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
/// assert_eq!(deque.remove_first(), Some(2));
/// assert_eq!(deque.remove_last(), Some(3));
/// assert_eq!(deque.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Deque<T> {
    chain: Chain<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque.
    #[inline]
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Creates an empty deque with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: Chain::with_capacity(capacity),
        }
    }

    /// Returns the number of values in the deque.
    #[inline]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the deque is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Removes every value.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Pushes a value onto the front.
    #[inline]
    pub fn add_first(&mut self, value: T) {
        self.chain.link_first(value);
    }

    /// Pushes a value onto the back.
    #[inline]
    pub fn add_last(&mut self, value: T) {
        self.chain.link_last(value);
    }

    /// Removes and returns the front value.
    #[inline]
    pub fn remove_first(&mut self) -> Option<T> {
        self.chain.unlink_first()
    }

    /// Removes and returns the back value.
    #[inline]
    pub fn remove_last(&mut self) -> Option<T> {
        self.chain.unlink_last()
    }

    /// Returns the front value without removing it.
    #[inline]
    pub fn peek_first(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Returns the back value without removing it.
    #[inline]
    pub fn peek_last(&self) -> Option<&T> {
        self.chain.back()
    }

    /// Returns a mutable reference to the front value.
    #[inline]
    pub fn peek_first_mut(&mut self) -> Option<&mut T> {
        self.chain.front_mut()
    }

    /// Returns a mutable reference to the back value.
    #[inline]
    pub fn peek_last_mut(&mut self) -> Option<&mut T> {
        self.chain.back_mut()
    }

    /// Returns an iterator over values, front to back.
    ///
    /// Each call starts over from the front.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.chain, f)
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            chain: Chain::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
