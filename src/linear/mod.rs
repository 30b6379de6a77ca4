//! Sequential collections.
//!
//! | Type           | Backing store          | Removal order          |
//! |----------------|------------------------|------------------------|
//! | [`ArrayDeque`] | growable ring buffer   | either end             |
//! | [`ArrayQueue`] | growable ring buffer   | FIFO                   |
//! | [`ArrayStack`] | `Vec`                  | LIFO                   |
//! | [`ArrayList`]  | `Vec`                  | LIFO, plus indexing    |
//! | [`LinkedList`] | arena-backed links     | either end             |
//!
//! # Examples
//!
//! ```rust
//! use corral::linear::{ArrayQueue, ArrayStack};
//!
//! let mut queue = ArrayQueue::new();
//! let mut stack = ArrayStack::new();
//! for value in 1..=3 {
//!     queue.add(value);
//!     stack.push(value);
//! }
//!
//! assert_eq!(queue.remove(), Ok(1));
//! assert_eq!(stack.pop(), Ok(3));
//! ```

mod deque;
mod linked_list;
mod list;
mod queue;
mod stack;

pub use deque::{ArrayDeque, ArrayDequeIntoIterator, ArrayDequeIterator, DEFAULT_CAPACITY};
pub use linked_list::{LinkedList, LinkedListIterator};
pub use list::ArrayList;
pub use queue::ArrayQueue;
pub use stack::ArrayStack;

/// Initial sizing shared by the array-backed linear collections.
///
/// # Examples
///
/// ```rust
/// use corral::linear::{ArrayDeque, DequeConfig};
///
/// let deque: ArrayDeque<u8> = ArrayDeque::with_config(DequeConfig { initial_capacity: 4 });
/// assert_eq!(deque.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DequeConfig {
    /// Number of slots allocated up front. Zero defers allocation to the first insert.
    pub initial_capacity: usize,
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}
