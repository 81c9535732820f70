//! Linear containers over one doubly-linked chain.
//!
//! This crate provides a list, a double-ended queue and a stack that all share
//! a single linkage engine. The engine does the work; the containers only
//! decide which ends and positions are reachable.
//!
//! # Design
//!
//! ```text
//! Storage (slab::Slab) - owns nodes, hands out stable keys
//! Chain                - head/tail/len + link/unlink primitives
//! List / Deque / Stack - facades that restrict which primitives are reachable
//! ```
//!
//! Nodes link to each other by key rather than by pointer. A `prev` link is a
//! plain key into the same arena, never an owning edge, so the chain is a
//! finite open path with no reference cycles.
//!
//! # Quick Start
//!
//! ```
//! use nexus_chain::{Deque, List, Stack};
//!
//! let mut list: List<u64> = List::new();
//! list.add(1);
//! list.add(2);
//! list.add(3);
//! list.add_at(1, 9).unwrap();
//! assert_eq!(list.to_vec(), vec![1, 9, 2, 3]);
//! assert_eq!(list.remove_at(2), Ok(2));
//! assert_eq!(list.index_of(&9), Some(1));
//!
//! let mut deque: Deque<u64> = Deque::new();
//! deque.add_last(1);
//! deque.add_first(2);
//! assert_eq!(deque.remove_last(), Some(1));
//!
//! let mut stack: Stack<u64> = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Some(2));
//! ```
//!
//! # Errors vs. absence
//!
//! | Operation | Out of range / empty |
//! |-----------|----------------------|
//! | `List::add_at`, `List::set` | `Err(Rejected<T>)`, value handed back |
//! | `List::remove_at` | `Err(OutOfRange)` |
//! | `List::get`, peeks, pops, end removals | `None` |
//!
//! A failed operation never modifies the container.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | add/remove/peek at either end | O(1) |
//! | `List::get`, `set`, `add_at`, `remove_at` | O(min(i, len - i)) |
//! | `List::remove`, `index_of`, `contains` | O(n) |
//!
//! # Logging
//!
//! Indexed walks emit `trace` events and rejected index operations emit
//! `debug` events through [`tracing`]. Install a subscriber to see them.
//!
//! # Thread Safety
//!
//! Containers do no internal locking. They are `Send`/`Sync` when `T` is;
//! share one across threads behind a `Mutex`.

#![warn(missing_docs)]

pub mod chain;
pub mod deque;
pub mod error;
pub mod iter;
pub mod key;
pub mod list;
pub mod node;
pub mod stack;
pub mod storage;

pub use chain::{Chain, NodeStorage};
pub use deque::Deque;
pub use error::{OutOfRange, Rejected};
pub use iter::{IntoIter, Iter, IterMut};
pub use key::Key;
pub use list::List;
pub use node::Node;
pub use stack::Stack;
pub use storage::Storage;
