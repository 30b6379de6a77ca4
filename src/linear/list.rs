//! Growable indexed list.

use std::fmt;
use std::ops::Index;
use std::slice;

use super::DequeConfig;
use crate::CollectionError;
use crate::traits::{Collection, Stack};

/// A growable list with positional access.
///
/// `add` and `remove` work at the end of the list, which also makes it a
/// [`Stack`].
///
/// # Examples
///
/// ```rust
/// use corral::linear::ArrayList;
///
/// let mut list = ArrayList::from(vec!['a', 'b']);
/// list.add('c');
///
/// assert_eq!(list.get(2), Some(&'c'));
/// assert_eq!(list.set(0, 'z'), Ok('a'));
/// assert_eq!(list.to_string(), "[z, b, c]");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArrayList<T> {
    elements: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DequeConfig::default())
    }

    /// Creates an empty list with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty list from a configuration record.
    #[must_use]
    pub fn with_config(config: DequeConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Appends an element.
    pub fn add(&mut self, item: T) {
        self.elements.push(item);
    }

    /// Appends every element of `items`, in order.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.elements.extend(items);
    }

    /// Removes the last element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the list is empty.
    pub fn remove(&mut self) -> Result<T, CollectionError> {
        self.elements
            .pop()
            .ok_or(CollectionError::empty("ArrayList", "remove"))
    }

    /// Returns the element at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len()`.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, CollectionError> {
        let length = self.elements.len();
        self.elements
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
            .ok_or(CollectionError::IndexOutOfBounds { index, length })
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterates from the first element to the last.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Copies the list into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> Collection for ArrayList<T> {
    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Stack<T> for ArrayList<T> {
    fn push(&mut self, item: T) {
        self.add(item);
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        self.remove()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Some(&10))]
    #[case(2, Some(&30))]
    #[case(3, None)]
    fn test_get(#[case] index: usize, #[case] expected: Option<&i32>) {
        let list = ArrayList::from(vec![10, 20, 30]);
        assert_eq!(list.get(index), expected);
    }

    #[rstest]
    fn test_set_out_of_bounds() {
        let mut list = ArrayList::from(vec![1]);
        assert_eq!(
            list.set(1, 5),
            Err(CollectionError::IndexOutOfBounds { index: 1, length: 1 })
        );
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[rstest]
    fn test_add_all_then_remove_from_end() {
        let mut list = ArrayList::new();
        list.add_all(["x", "y", "z"]);

        assert_eq!(list.remove(), Ok("z"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], "y");
    }

    #[rstest]
    fn test_remove_on_empty() {
        let mut list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.remove(), Err(CollectionError::empty("ArrayList", "remove")));
        assert_eq!(Stack::pop(&mut list), Err(CollectionError::empty("ArrayList", "remove")));
    }
}
