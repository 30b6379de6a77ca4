//! Doubly linked list with arena-allocated nodes.

use std::fmt;

use crate::CollectionError;
use crate::arena::{LinkedSlots, LinkedSlotsIter};
use crate::traits::{Collection, Deque, Queue, Stack};

/// A doubly linked list.
///
/// Nodes are stored in an index arena and link to each other by slot index,
/// so both ends support O(1) insertion and removal without any shared
/// ownership between nodes.
///
/// # Examples
///
/// ```rust
/// use corral::linear::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.add_back(2);
/// list.add_front(1);
/// list.add_all([3, 4]);
///
/// assert_eq!(list.remove_back(), Ok(4));
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: LinkedSlots<T>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: LinkedSlots::new(),
        }
    }

    /// Inserts at the front.
    pub fn add_front(&mut self, item: T) {
        self.slots.push_front(item);
    }

    /// Inserts at the back.
    pub fn add_back(&mut self, item: T) {
        self.slots.push_back(item);
    }

    /// Appends every element of `items` at the back, in order.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add_back(item);
        }
    }

    /// Removes the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn remove_front(&mut self) -> Result<T, CollectionError> {
        self.slots
            .pop_front()
            .ok_or(CollectionError::empty("LinkedList", "remove_front"))
    }

    /// Removes the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn remove_back(&mut self) -> Result<T, CollectionError> {
        self.slots
            .pop_back()
            .ok_or(CollectionError::empty("LinkedList", "remove_back"))
    }

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn peek_front(&self) -> Result<&T, CollectionError> {
        self.slots
            .head()
            .map(|handle| self.slots.get(handle))
            .ok_or(CollectionError::empty("LinkedList", "peek_front"))
    }

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn peek_back(&self) -> Result<&T, CollectionError> {
        self.slots
            .tail()
            .map(|handle| self.slots.get(handle))
            .ok_or(CollectionError::empty("LinkedList", "peek_back"))
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.len() == 0
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterates front to back; `.rev()` walks back to front.
    #[must_use]
    pub const fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            inner: self.slots.iter(),
        }
    }

    /// Copies the list into a `Vec`, front first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for LinkedList<T> {
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Queue<T> for LinkedList<T> {
    fn add(&mut self, item: T) {
        self.add_back(item);
    }

    fn remove(&mut self) -> Result<T, CollectionError> {
        self.remove_front()
    }
}

impl<T> Stack<T> for LinkedList<T> {
    fn push(&mut self, item: T) {
        self.add_front(item);
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        self.remove_front()
    }
}

impl<T> Deque<T> for LinkedList<T> {
    fn add_front(&mut self, item: T) {
        Self::add_front(self, item);
    }

    fn add_back(&mut self, item: T) {
        Self::add_back(self, item);
    }

    fn remove_front(&mut self) -> Result<T, CollectionError> {
        Self::remove_front(self)
    }

    fn remove_back(&mut self) -> Result<T, CollectionError> {
        Self::remove_back(self)
    }

    fn peek_front(&self) -> Result<&T, CollectionError> {
        Self::peek_front(self)
    }

    fn peek_back(&self) -> Result<&T, CollectionError> {
        Self::peek_back(self)
    }
}

/// Borrowing iterator over a [`LinkedList`].
#[derive(Clone)]
pub struct LinkedListIterator<'a, T> {
    inner: LinkedSlotsIter<'a, T>,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for LinkedListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add_all(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}
