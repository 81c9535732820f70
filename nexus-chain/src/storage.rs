//! Storage trait for the node arena.
//!
//! A chain never allocates nodes itself. It asks its storage for a slot and
//! gets back a stable key that stays valid until the slot is removed. Links
//! between nodes are keys into the same storage, so no node owns another.

use crate::Key;

/// Slab-like arena with stable keys.
///
/// Insertion is infallible; the arena grows on demand. Removed slots may be
/// reused by future inserts.
///
/// # Safety
///
/// [`Chain`](crate::Chain) and its iterators dereference keys through the
/// unchecked accessors and hand out one `&mut T` per key at the same time.
/// Implementor guarantees:
///
/// 1. **Distinct slots**: two occupied keys never name the same value.
/// 2. **Stable keys**: a key returned by `insert` names that value until it
///    is removed or the storage is cleared.
/// 3. **Consistent lookup**: `get`, `get_mut` and the unchecked accessors
///    agree on which keys are occupied, and `len` counts them.
/// 4. **Sentinel never issued**: `insert` never returns `Key::NONE`.
///
/// # Example
///
/// A safe implementation is rejected; the trait has to be implemented with
/// `unsafe impl`.
///
/// ```compile_fail
/// use nexus_chain::Storage;
///
/// struct OneSlot<T>(Option<T>);
///
/// impl<T> Storage<T> for OneSlot<T> {
///     type Key = usize;
///     fn with_capacity(_: usize) -> Self { OneSlot(None) }
///     fn insert(&mut self, value: T) -> usize { self.0 = Some(value); 0 }
///     fn remove(&mut self, _: usize) -> Option<T> { self.0.take() }
///     fn get(&self, _: usize) -> Option<&T> { self.0.as_ref() }
///     fn get_mut(&mut self, _: usize) -> Option<&mut T> { self.0.as_mut() }
///     unsafe fn get_unchecked(&self, _: usize) -> &T { self.0.as_ref().unwrap() }
///     unsafe fn get_unchecked_mut(&mut self, _: usize) -> &mut T { self.0.as_mut().unwrap() }
///     fn len(&self) -> usize { self.0.is_some() as usize }
///     fn clear(&mut self) { self.0 = None; }
/// }
/// ```
pub unsafe trait Storage<T> {
    /// Key type for this storage.
    type Key: Key;

    /// Creates storage with room for at least `capacity` values.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Inserts a value, returning its stable key.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns a reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must be valid and occupied.
    unsafe fn get_unchecked(&self, key: Self::Key) -> &T;

    /// Returns a mutable reference without checking occupancy.
    ///
    /// # Safety
    ///
    /// `key` must be valid and occupied.
    unsafe fn get_unchecked_mut(&mut self, key: Self::Key) -> &mut T;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value and frees all slots.
    fn clear(&mut self);
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

// SAFETY: slab keys are indices into one `Vec` of entries, so occupied keys are
// distinct and stay put until removed. `usize::MAX` is never a valid index.
unsafe impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        slab::Slab::with_capacity(capacity)
    }

    #[inline]
    fn insert(&mut self, value: T) -> Self::Key {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, key: Self::Key) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: Self::Key) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    unsafe fn get_unchecked(&self, key: Self::Key) -> &T {
        unsafe { slab::Slab::get_unchecked(self, key) }
    }

    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: Self::Key) -> &mut T {
        unsafe { slab::Slab::get_unchecked_mut(self, key) }
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        slab::Slab::clear(self);
    }
}
