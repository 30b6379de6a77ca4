//! Contracts shared by the collections in this crate.
//!
//! Each trait describes a capability rather than a storage strategy, so a
//! caller can accept `impl Queue<T>` and be handed an [`ArrayQueue`], an
//! [`ArrayDeque`] or a [`BinaryHeap`] alike.
//!
//! [`ArrayQueue`]: crate::linear::ArrayQueue
//! [`ArrayDeque`]: crate::linear::ArrayDeque
//! [`BinaryHeap`]: crate::heap::BinaryHeap

use crate::CollectionError;

/// A container with a known number of elements.
pub trait Collection {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A collection that hands elements back in a policy-defined order.
pub trait Queue<T>: Collection {
    /// Adds an element.
    fn add(&mut self, item: T);

    /// Removes the next element according to the queue's policy.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    fn remove(&mut self) -> Result<T, CollectionError>;
}

/// A last-in, first-out collection.
pub trait Stack<T>: Collection {
    /// Pushes an element onto the top.
    fn push(&mut self, item: T);

    /// Pops the top element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    fn pop(&mut self) -> Result<T, CollectionError>;
}

/// A double-ended queue.
///
/// Deques also implement [`Queue`] and [`Stack`] with fixed meanings:
/// `add` appends at the back, `push` prepends at the front, and both
/// `remove` and `pop` take from the front.
pub trait Deque<T>: Queue<T> + Stack<T> {
    /// Inserts at the front.
    fn add_front(&mut self, item: T);

    /// Inserts at the back.
    fn add_back(&mut self, item: T);

    /// Removes from the front.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    fn remove_front(&mut self) -> Result<T, CollectionError>;

    /// Removes from the back.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    fn remove_back(&mut self) -> Result<T, CollectionError>;

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    fn peek_front(&self) -> Result<&T, CollectionError>;

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    fn peek_back(&self) -> Result<&T, CollectionError>;
}

/// A key-value association.
pub trait Map<K, V>: Collection {
    /// Returns the value stored for `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Stores `value` under `key`, returning the value it replaced.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Removes `key`, returning its value.
    fn remove_key(&mut self, key: &K) -> Option<V>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}
