//! Index-addressable list.
//!
//! [`List`] exposes the chain as an ordered, 0-indexed sequence. Duplicates
//! are allowed and insertion order is preserved.
//!
//! # Two failure policies
//!
//! Structural index operations ([`add_at`](List::add_at),
//! [`remove_at`](List::remove_at), [`set`](List::set)) return an error when
//! the index is out of range and leave the list untouched. Lookups
//! ([`get`](List::get)) and end removals return `None` instead; a miss there
//! is an expected outcome.
//!
//! ```
//! use nexus_chain::List;
//!
//! let mut list: List<u64> = List::new();
//! list.add(1);
//! list.add(3);
//! list.add_at(1, 2).unwrap();
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//! assert_eq!(list.get(7), None);
//! assert!(list.remove_at(7).is_err());
//! ```
//!
//! # Equality
//!
//! [`remove`](List::remove), [`index_of`](List::index_of) and
//! [`contains`](List::contains) compare values structurally through
//! `PartialEq`.

use std::fmt;

use tracing::debug;

use crate::iter::{IntoIter, Iter, IterMut};
use crate::{Chain, OutOfRange, Rejected};

/// An ordered list over a doubly-linked chain.
///
/// Indexed access walks from whichever end is closer, so it costs at most
/// `len / 2` hops.
#[derive(Clone, PartialEq, Eq)]
pub struct List<T> {
    chain: Chain<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Creates an empty list with room for `capacity` values before the node
    /// arena has to grow.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: Chain::with_capacity(capacity),
        }
    }

    /// Returns the number of values in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Removes every value.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends a value. Same as [`add_last`](Self::add_last).
    #[inline]
    pub fn add(&mut self, value: T) {
        self.add_last(value);
    }

    /// Inserts a value at the front.
    #[inline]
    pub fn add_first(&mut self, value: T) {
        self.chain.link_first(value);
    }

    /// Appends a value at the back.
    #[inline]
    pub fn add_last(&mut self, value: T) {
        self.chain.link_last(value);
    }

    /// Inserts a value so that it ends up at `index`.
    ///
    /// `index == len()` appends. Both ends are O(1); interior positions walk
    /// from the nearer end.
    ///
    /// # Errors
    ///
    /// Returns the value inside [`Rejected`] if `index > len()`. The list is
    /// not modified.
    pub fn add_at(&mut self, index: usize, value: T) -> Result<(), Rejected<T>> {
        let len = self.len();
        if index > len {
            debug!(index, len, "add_at rejected");
            return Err(Rejected {
                value,
                error: OutOfRange { index, len },
            });
        }

        if index == 0 {
            self.chain.link_first(value);
        } else if index == len {
            self.chain.link_last(value);
        } else {
            let at = self.chain.node_at(index);
            self.chain.link_before(at, value);
        }
        Ok(())
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the first value, or `None` if empty.
    #[inline]
    pub fn remove_first(&mut self) -> Option<T> {
        self.chain.unlink_first()
    }

    /// Removes and returns the last value, or `None` if empty.
    #[inline]
    pub fn remove_last(&mut self) -> Option<T> {
        self.chain.unlink_last()
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len()`. The list is not modified.
    pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        let len = self.len();
        if index >= len {
            debug!(index, len, "remove_at rejected");
            return Err(OutOfRange { index, len });
        }

        let key = if index == 0 {
            self.chain.head()
        } else if index == len - 1 {
            self.chain.tail()
        } else {
            self.chain.node_at(index)
        };
        Ok(self.chain.unlink(key))
    }

    /// Removes the first value equal to `value`.
    ///
    /// Returns `true` if a value was removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.chain.find(|v| v == value) {
            Some((_, key)) => {
                self.chain.unlink(key);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the value at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.chain.get(self.chain.node_at(index))
    }

    /// Returns a mutable reference to the value at `index`, or `None` if out
    /// of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        let key = self.chain.node_at(index);
        self.chain.get_mut(key)
    }

    /// Replaces the value at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns the new value inside [`Rejected`] if `index >= len()`. The
    /// list is not modified.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Rejected<T>> {
        let len = self.len();
        if index >= len {
            debug!(index, len, "set rejected");
            return Err(Rejected {
                value,
                error: OutOfRange { index, len },
            });
        }

        let key = self.chain.node_at(index);
        Ok(self.chain.replace(key, value))
    }

    /// Returns the first value, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Returns the last value, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.chain.back()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns the index of the first value equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.chain.position(|v| v == value)
    }

    /// Returns `true` if any value equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    // ========================================================================
    // Iteration / export
    // ========================================================================

    /// Returns an iterator over values, first to last.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    /// Returns an iterator over mutable references, first to last.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.chain.iter_mut()
    }

    /// Copies the current values into a `Vec`, first to last.
    ///
    /// The snapshot does not follow later mutation of the list.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.chain.to_vec()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.chain, f)
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            chain: Chain::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
