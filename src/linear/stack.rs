//! Last-in, first-out stack over a `Vec`.

use std::fmt;
use std::iter::Rev;
use std::slice;

use super::DequeConfig;
use crate::CollectionError;
use crate::traits::{Collection, Stack};

/// A LIFO stack backed by a growable vector.
///
/// The top of the stack is the end of the vector, so `push` and `pop` are
/// amortized O(1).
///
/// # Examples
///
/// ```rust
/// use corral::linear::ArrayStack;
///
/// let mut stack = ArrayStack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
/// assert_eq!(stack.to_vec(), vec![1, 2]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArrayStack<T> {
    elements: Vec<T>,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DequeConfig::default())
    }

    /// Creates an empty stack with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty stack from a configuration record.
    #[must_use]
    pub fn with_config(config: DequeConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Pushes an element onto the top.
    pub fn push(&mut self, item: T) {
        self.elements.push(item);
    }

    /// Pops the top element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.elements
            .pop()
            .ok_or(CollectionError::empty("ArrayStack", "pop"))
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.elements
            .last()
            .ok_or(CollectionError::empty("ArrayStack", "peek"))
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the stack is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.elements.iter().rev()
    }

    /// Copies the stack into a `Vec`, bottom first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for ArrayStack<T> {
    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, item: T) {
        Self::push(self, item);
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        Self::pop(self)
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self.iter() {
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
