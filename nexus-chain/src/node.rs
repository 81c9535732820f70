//! Chain node.

use crate::Key;

/// A node in the chain: one value plus its neighbour links.
///
/// Links are keys into the same arena the node lives in. Callers of the
/// containers never see nodes, only the values they hold.
#[derive(Debug, Clone)]
pub struct Node<T, K: Key = usize> {
    pub(crate) value: T,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<T, K: Key> Node<T, K> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            prev: K::NONE,
            next: K::NONE,
        }
    }
}
