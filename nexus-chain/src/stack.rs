//! LIFO stack.

use std::fmt;

use crate::iter::{IntoIter, Iter};
use crate::Chain;

/// A last-in, first-out stack over a doubly-linked chain.
///
/// The top of the stack is the head of the chain. `pop` and `peek` on an
/// empty stack return `None`.
///
/// # Example
///
/// ```
/// use nexus_chain::Stack;
///
/// let mut stack: Stack<u64> = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    chain: Chain<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Creates an empty stack with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: Chain::with_capacity(capacity),
        }
    }

    /// Returns the number of values on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Removes every value.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Pushes a value onto the top.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.chain.link_first(value);
    }

    /// Removes and returns the top value.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.chain.unlink_first()
    }

    /// Returns the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Returns a mutable reference to the top value.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.chain.front_mut()
    }

    /// Returns an iterator over values, top to bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.chain, f)
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut stack = Self::with_capacity(iter.size_hint().0);
        stack.extend(iter);
        stack
    }
}

/// Yields values in pop order.
impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
