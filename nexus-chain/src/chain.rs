//! Doubly-linked chain engine.
//!
//! [`Chain`] owns a node arena plus the head, tail and length of one linked
//! sequence. Every container in this crate is a thin facade over a chain; all
//! structural changes go through the primitives here.
//!
//! # Invariants
//!
//! Between public calls:
//!
//! - `len == 0` iff `head` is `NONE` iff `tail` is `NONE`
//! - with one node, `head == tail` and both its links are `NONE`
//! - `n.next.prev == n` and `n.prev.next == n` wherever the link exists
//! - walking `next` from `head`, or `prev` from `tail`, visits exactly `len`
//!   nodes
//! - the arena holds exactly the nodes of the chain
//!
//! Because the arena is owned by the chain, a key can only ever name a node of
//! this chain. The arena reuses freed slots, so a stale key either names
//! whichever live node took its slot or panics on a vacant one. Either way the
//! invariants above still hold.
//!
//! # Example
//!
//! ```
//! use nexus_chain::Chain;
//!
//! let mut chain: Chain<u64> = Chain::new();
//!
//! chain.link_last(1);
//! let three = chain.link_last(3);
//! chain.link_before(three, 2);
//! chain.link_first(0);
//!
//! let values: Vec<_> = chain.iter().copied().collect();
//! assert_eq!(values, vec![0, 1, 2, 3]);
//!
//! // Index 3 is closer to the tail, so the walk starts there.
//! let key = chain.node_at(3);
//! assert_eq!(chain.unlink(key), 3);
//! assert_eq!(chain.unlink_first(), Some(0));
//! ```

use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::iter::{IntoIter, Iter, IterMut};
use crate::{Key, Node, Storage};

/// Default node arena: a growable `slab::Slab` keyed by `usize`.
pub type NodeStorage<T> = slab::Slab<Node<T, usize>>;

/// Which end an indexed lookup walked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    FromHead,
    FromTail,
}

/// Result of a nearest-end walk.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Seek<K> {
    pub(crate) key: K,
    pub(crate) hops: usize,
    pub(crate) direction: Direction,
}

/// A doubly-linked chain that owns its node arena.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Node arena (default [`NodeStorage<T>`])
/// - `K`: Key type (default `usize`)
#[derive(Clone)]
pub struct Chain<T, S = NodeStorage<T>, K: Key = usize>
where
    S: Storage<Node<T, K>, Key = K>,
{
    head: K,
    tail: K,
    len: usize,
    nodes: S,
    _marker: PhantomData<T>,
}

impl<T, S, K: Key> Default for Chain<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, K: Key> Chain<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    /// Creates an empty chain.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty chain with room for `capacity` nodes before the
    /// arena has to grow.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            nodes: S::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// Returns the number of nodes in the chain.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `K::NONE` if empty.
    #[inline]
    pub const fn head(&self) -> K {
        self.head
    }

    /// Returns the tail node's key, or `K::NONE` if empty.
    #[inline]
    pub const fn tail(&self) -> K {
        self.tail
    }

    // ========================================================================
    // Link operations
    // ========================================================================

    /// Links a new node holding `value` at the head.
    ///
    /// Returns the new node's key.
    #[inline]
    pub fn link_first(&mut self, value: T) -> K {
        let key = self.nodes.insert(Node::new(value));
        // Safety: key was just inserted
        unsafe { self.nodes.get_unchecked_mut(key) }.next = self.head;

        if self.head.is_some() {
            // Safety: head is valid when is_some()
            unsafe { self.nodes.get_unchecked_mut(self.head) }.prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
        key
    }

    /// Links a new node holding `value` at the tail.
    ///
    /// Returns the new node's key.
    #[inline]
    pub fn link_last(&mut self, value: T) -> K {
        let key = self.nodes.insert(Node::new(value));
        // Safety: key was just inserted
        unsafe { self.nodes.get_unchecked_mut(key) }.prev = self.tail;

        if self.tail.is_some() {
            // Safety: tail is valid when is_some()
            unsafe { self.nodes.get_unchecked_mut(self.tail) }.next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
        key
    }

    /// Links a new node holding `value` immediately before `before`.
    ///
    /// Returns the new node's key.
    ///
    /// # Panics
    ///
    /// Panics if `before` names a vacant slot.
    #[inline]
    pub fn link_before(&mut self, before: K, value: T) -> K {
        let prev = self.nodes.get(before).expect("invalid 'before' key").prev;

        let key = self.nodes.insert(Node::new(value));
        {
            // Safety: key was just inserted
            let node = unsafe { self.nodes.get_unchecked_mut(key) };
            node.prev = prev;
            node.next = before;
        }

        // Safety: before validated above
        unsafe { self.nodes.get_unchecked_mut(before) }.prev = key;

        if prev.is_some() {
            // Safety: prev is valid when is_some() (chain invariant)
            unsafe { self.nodes.get_unchecked_mut(prev) }.next = key;
        } else {
            self.head = key;
        }

        self.len += 1;
        key
    }

    // ========================================================================
    // Unlink operations
    // ========================================================================

    /// Removes the head node and returns its value.
    ///
    /// Returns `None` if the chain is empty.
    #[inline]
    pub fn unlink_first(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }
        Some(self.unlink(self.head))
    }

    /// Removes the tail node and returns its value.
    ///
    /// Returns `None` if the chain is empty.
    #[inline]
    pub fn unlink_last(&mut self) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }
        Some(self.unlink(self.tail))
    }

    /// Removes a node from anywhere in the chain, reconnecting its
    /// neighbours, and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `key` names a vacant slot.
    #[inline]
    pub fn unlink(&mut self, key: K) -> T {
        let node = self.nodes.remove(key).expect("invalid key");

        if node.prev.is_some() {
            // Safety: prev is valid when is_some() (chain invariant)
            unsafe { self.nodes.get_unchecked_mut(node.prev) }.next = node.next;
        } else {
            self.head = node.next;
        }

        if node.next.is_some() {
            // Safety: next is valid when is_some() (chain invariant)
            unsafe { self.nodes.get_unchecked_mut(node.next) }.prev = node.prev;
        } else {
            self.tail = node.prev;
        }

        self.len -= 1;
        node.value
    }

    /// Drops every node and resets to the empty state.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Indexed lookup
    // ========================================================================

    /// Returns the key of the node at logical position `index`.
    ///
    /// Walks from the head when `index` lies in the first half (`2 * index <
    /// len`), otherwise from the tail, so no lookup takes more than `len / 2`
    /// hops.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn node_at(&self, index: usize) -> K {
        self.seek(index).key
    }

    pub(crate) fn seek(&self, index: usize) -> Seek<K> {
        assert!(
            index < self.len,
            "index {index} out of bounds for length {}",
            self.len
        );

        let seek = if 2 * index < self.len {
            let mut key = self.head;
            for _ in 0..index {
                // Safety: fewer than len hops from head stay inside the chain
                key = unsafe { self.nodes.get_unchecked(key) }.next;
            }
            Seek {
                key,
                hops: index,
                direction: Direction::FromHead,
            }
        } else {
            let hops = self.len - 1 - index;
            let mut key = self.tail;
            for _ in 0..hops {
                // Safety: fewer than len hops from tail stay inside the chain
                key = unsafe { self.nodes.get_unchecked(key) }.prev;
            }
            Seek {
                key,
                hops,
                direction: Direction::FromTail,
            }
        };

        trace!(
            index,
            len = self.len,
            hops = seek.hops,
            direction = ?seek.direction,
            "seek"
        );
        seek
    }

    /// Returns the first position and key whose value satisfies `pred`,
    /// scanning from the head.
    pub fn find<F>(&self, mut pred: F) -> Option<(usize, K)>
    where
        F: FnMut(&T) -> bool,
    {
        let mut key = self.head;
        let mut index = 0;
        while key.is_some() {
            // Safety: key came from chain traversal
            let node = unsafe { self.nodes.get_unchecked(key) };
            if pred(&node.value) {
                return Some((index, key));
            }
            key = node.next;
            index += 1;
        }
        None
    }

    /// Returns the index of the first value that satisfies `pred`.
    #[inline]
    pub fn position<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.find(pred).map(|(index, _)| index)
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the value at `key`.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value at `key`.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.nodes.get_mut(key).map(|node| &mut node.value)
    }

    /// Replaces the value at `key`, returning the old one.
    ///
    /// # Panics
    ///
    /// Panics if `key` names a vacant slot.
    #[inline]
    pub fn replace(&mut self, key: K, value: T) -> T {
        let node = self.nodes.get_mut(key).expect("invalid key");
        std::mem::replace(&mut node.value, value)
    }

    /// Returns a reference to the head value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            // Safety: head is valid when is_some()
            Some(unsafe { &self.nodes.get_unchecked(self.head).value })
        }
    }

    /// Returns a mutable reference to the head value.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_none() {
            None
        } else {
            // Safety: head is valid when is_some()
            Some(unsafe { &mut self.nodes.get_unchecked_mut(self.head).value })
        }
    }

    /// Returns a reference to the tail value.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            // Safety: tail is valid when is_some()
            Some(unsafe { &self.nodes.get_unchecked(self.tail).value })
        }
    }

    /// Returns a mutable reference to the tail value.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail.is_none() {
            None
        } else {
            // Safety: tail is valid when is_some()
            Some(unsafe { &mut self.nodes.get_unchecked_mut(self.tail).value })
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to values, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, K> {
        Iter::new(&self.nodes, self.head, self.tail, self.len)
    }

    /// Returns an iterator over mutable references to values, head to tail.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, S, K> {
        IterMut::new(&mut self.nodes, self.head, self.tail, self.len)
    }

    /// Copies the values into a `Vec`, head to tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.len == 0, self.head.is_none(), "len/head disagree");
        assert_eq!(self.len == 0, self.tail.is_none(), "len/tail disagree");
        assert_eq!(self.nodes.len(), self.len, "arena holds stray nodes");

        if self.len == 1 {
            assert_eq!(self.head, self.tail);
            let node = self.nodes.get(self.head).unwrap();
            assert!(node.prev.is_none() && node.next.is_none());
        }

        let mut forward = Vec::with_capacity(self.len);
        let mut prev = K::NONE;
        let mut key = self.head;
        while key.is_some() {
            assert!(forward.len() < self.len, "forward walk longer than len");
            let node = self.nodes.get(key).expect("dangling next link");
            assert_eq!(node.prev, prev, "prev link does not mirror next link");
            forward.push(key);
            prev = key;
            key = node.next;
        }
        assert_eq!(forward.len(), self.len);
        assert_eq!(prev, self.tail);

        let mut backward = Vec::with_capacity(self.len);
        let mut key = self.tail;
        while key.is_some() {
            assert!(backward.len() < self.len, "backward walk longer than len");
            backward.push(key);
            key = self.nodes.get(key).expect("dangling prev link").prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }
}

impl<T: fmt::Debug, S, K: Key> fmt::Debug for Chain<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, S, K: Key> PartialEq for Chain<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S, K: Key> Eq for Chain<T, S, K> where S: Storage<Node<T, K>, Key = K> {}

impl<T, S, K: Key> Extend<T> for Chain<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link_last(value);
        }
    }
}

impl<T, S, K: Key> FromIterator<T> for Chain<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut chain = Self::with_capacity(iter.size_hint().0);
        chain.extend(iter);
        chain
    }
}

impl<T, S, K: Key> IntoIterator for Chain<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = T;
    type IntoIter = IntoIter<T, S, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, S, K: Key> IntoIterator for &'a Chain<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S, K: Key> IntoIterator for &'a mut Chain<T, S, K>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, S, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
