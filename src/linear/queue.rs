//! First-in, first-out queue over the ring buffer.

use std::fmt;

use super::{ArrayDeque, ArrayDequeIterator, DequeConfig};
use crate::CollectionError;
use crate::traits::{Collection, Queue};

/// A FIFO queue backed by an [`ArrayDeque`].
///
/// Elements enter at the back and leave from the front.
///
/// # Examples
///
/// ```rust
/// use corral::linear::ArrayQueue;
///
/// let mut queue = ArrayQueue::new();
/// queue.add("first");
/// queue.add("second");
///
/// assert_eq!(queue.peek(), Ok(&"first"));
/// assert_eq!(queue.remove(), Ok("first"));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayQueue<T> {
    deque: ArrayDeque<T>,
}

impl<T> ArrayQueue<T> {
    /// Creates an empty queue with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DequeConfig::default())
    }

    /// Creates an empty queue with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            deque: ArrayDeque::with_capacity(capacity),
        }
    }

    /// Creates an empty queue from a configuration record.
    #[must_use]
    pub fn with_config(config: DequeConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Appends an element at the back.
    pub fn add(&mut self, item: T) {
        self.deque.add_back(item);
    }

    /// Removes the element at the front.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    pub fn remove(&mut self) -> Result<T, CollectionError> {
        self.deque
            .remove_front()
            .map_err(|_| CollectionError::empty("ArrayQueue", "remove"))
    }

    /// Returns the element at the front without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.deque
            .peek_front()
            .map_err(|_| CollectionError::empty("ArrayQueue", "peek"))
    }

    /// Returns the number of queued elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.deque.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Drops every queued element.
    pub fn clear(&mut self) {
        self.deque.clear();
    }

    /// Iterates in removal order.
    pub fn iter(&self) -> ArrayDequeIterator<'_, T> {
        self.deque.iter()
    }

    /// Copies the queue into a `Vec` in removal order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.deque.to_vec()
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for ArrayQueue<T> {
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn add(&mut self, item: T) {
        Self::add(self, item);
    }

    fn remove(&mut self) -> Result<T, CollectionError> {
        Self::remove(self)
    }
}

impl<T> FromIterator<T> for ArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            deque: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.deque.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a ArrayQueue<T> {
    type Item = &'a T;
    type IntoIter = ArrayDequeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.deque, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_fifo_order() {
        let mut queue: ArrayQueue<i32> = (1..=5).collect();
        let drained: Vec<i32> = std::iter::from_fn(|| queue.remove().ok()).collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_empty_errors_name_the_queue() {
        let mut queue: ArrayQueue<i32> = ArrayQueue::new();
        assert_eq!(queue.remove(), Err(CollectionError::empty("ArrayQueue", "remove")));
        assert_eq!(queue.peek(), Err(CollectionError::empty("ArrayQueue", "peek")));
    }

    #[rstest]
    fn test_grows_past_initial_capacity() {
        let mut queue = ArrayQueue::with_capacity(2);
        for value in 0..7 {
            queue.add(value);
        }
        assert_eq!(queue.to_vec(), (0..7).collect::<Vec<_>>());
        assert_eq!(format!("{queue}"), "[0, 1, 2, 3, 4, 5, 6]");
    }
}
