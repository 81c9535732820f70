//! Iterators over a chain.
//!
//! Borrowing iterators walk the links lazily and start over from the head on
//! every call to `iter()`. They are double-ended and know their exact length,
//! so the front and back cursors never cross.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::chain::NodeStorage;
use crate::{Chain, Key, Node, Storage};

// =============================================================================
// Iter
// =============================================================================

/// Iterator over references to chain values.
pub struct Iter<'a, T, S = NodeStorage<T>, K: Key = usize> {
    nodes: &'a S,
    front: K,
    back: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, S, K: Key> Iter<'a, T, S, K> {
    #[inline]
    pub(crate) fn new(nodes: &'a S, front: K, back: K, remaining: usize) -> Self {
        Self {
            nodes,
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }
}

impl<T, S, K: Key> Clone for Iter<'_, T, S, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: chain invariants guarantee front is valid while remaining > 0
        let node = unsafe { self.nodes.get_unchecked(self.front) };
        self.front = node.next;
        self.remaining -= 1;

        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> DoubleEndedIterator for Iter<'a, T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: chain invariants guarantee back is valid while remaining > 0
        let node = unsafe { self.nodes.get_unchecked(self.back) };
        self.back = node.prev;
        self.remaining -= 1;

        Some(&node.value)
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<Node<T, K>, Key = K>
{
}

impl<'a, T: 'a, S, K: Key + 'a> FusedIterator for Iter<'a, T, S, K> where
    S: Storage<Node<T, K>, Key = K>
{
}

// =============================================================================
// IterMut
// =============================================================================

/// Iterator over mutable references to chain values.
pub struct IterMut<'a, T, S = NodeStorage<T>, K: Key = usize> {
    nodes: &'a mut S,
    front: K,
    back: K,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T, S, K: Key> IterMut<'a, T, S, K> {
    #[inline]
    pub(crate) fn new(nodes: &'a mut S, front: K, back: K, remaining: usize) -> Self {
        Self {
            nodes,
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for IterMut<'a, T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: chain invariants guarantee front is valid while remaining > 0
        let node = unsafe { self.nodes.get_unchecked_mut(self.front) };
        self.front = node.next;
        self.remaining -= 1;

        // Extend lifetime - each node is yielded at most once
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> DoubleEndedIterator for IterMut<'a, T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Safety: chain invariants guarantee back is valid while remaining > 0
        let node = unsafe { self.nodes.get_unchecked_mut(self.back) };
        self.back = node.prev;
        self.remaining -= 1;

        // Extend lifetime - each node is yielded at most once
        Some(unsafe { &mut *(&mut node.value as *mut T) })
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for IterMut<'a, T, S, K> where
    S: Storage<Node<T, K>, Key = K>
{
}

impl<'a, T: 'a, S, K: Key + 'a> FusedIterator for IterMut<'a, T, S, K> where
    S: Storage<Node<T, K>, Key = K>
{
}

// =============================================================================
// IntoIter
// =============================================================================

/// Owning iterator that unlinks values head first.
pub struct IntoIter<T, S = NodeStorage<T>, K: Key = usize>
where
    S: Storage<Node<T, K>, Key = K>,
{
    chain: Chain<T, S, K>,
}

impl<T, S, K: Key> IntoIter<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    #[inline]
    pub(crate) fn new(chain: Chain<T, S, K>) -> Self {
        Self { chain }
    }
}

impl<T, S, K: Key> Iterator for IntoIter<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chain.unlink_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl<T, S, K: Key> DoubleEndedIterator for IntoIter<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chain.unlink_last()
    }
}

impl<T, S, K: Key> ExactSizeIterator for IntoIter<T, S, K> where
    S: Storage<Node<T, K>, Key = K>
{
}

impl<T, S, K: Key> FusedIterator for IntoIter<T, S, K> where S: Storage<Node<T, K>, Key = K> {}
