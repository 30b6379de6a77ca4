//! Array-backed binary heap with a pluggable ordering.
//!
//! The element that a [`Comparator`] ranks lowest is always at the root, so
//! [`NaturalOrder`] gives a min-heap and [`Reversed`] of it a max-heap. Any
//! closure `Fn(&T, &T) -> Ordering` is also a comparator.
//!
//! # Examples
//!
//! ```rust
//! use corral::heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::max();
//! heap.add(3);
//! heap.add(9);
//! heap.add(1);
//!
//! assert_eq!(heap.peek(), Ok(&9));
//! assert_eq!(heap.into_sorted_vec(), vec![9, 3, 1]);
//! ```
//!
//! Ordering by a key:
//!
//! ```rust
//! use corral::heap::BinaryHeap;
//!
//! let mut tasks = BinaryHeap::with_comparator(|left: &(&str, u8), right: &(&str, u8)| {
//!     left.1.cmp(&right.1)
//! });
//! tasks.add(("write", 2));
//! tasks.add(("plan", 1));
//!
//! assert_eq!(tasks.remove().map(|(name, _)| name), Ok("plan"));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::CollectionError;
use crate::traits::{Collection, Queue};

/// Initial capacity of a heap built without a configuration.
pub const DEFAULT_CAPACITY: usize = 10;

/// Initial sizing of a [`BinaryHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct HeapConfig {
    /// Number of elements allocated up front.
    pub initial_capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Ranks two elements. `Less` means `left` leaves the heap first.
pub trait Comparator<T> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// The `Ord` ordering: smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// The inverse of another comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// A binary heap stored in a `Vec`, ordered by a [`Comparator`].
///
/// # Time Complexity
///
/// | Operation | Complexity     |
/// |-----------|----------------|
/// | `add`     | O(log n)       |
/// | `remove`  | O(log n)       |
/// | `peek`    | O(1)           |
#[derive(Clone)]
pub struct BinaryHeap<T, C = NaturalOrder> {
    elements: Vec<T>,
    comparator: C,
}

impl<T: Ord> BinaryHeap<T, NaturalOrder> {
    /// Creates an empty min-heap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty min-heap.
    #[must_use]
    pub fn min() -> Self {
        Self::new()
    }
}

impl<T: Ord> BinaryHeap<T, Reversed<NaturalOrder>> {
    /// Creates an empty max-heap.
    #[must_use]
    pub fn max() -> Self {
        Self::with_comparator(Reversed(NaturalOrder))
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_config(HeapConfig::default(), comparator)
    }

    /// Creates an empty heap from a configuration record and a comparator.
    pub fn with_config(config: HeapConfig, comparator: C) -> Self {
        Self {
            elements: Vec::with_capacity(config.initial_capacity),
            comparator,
        }
    }

    /// Adds an element.
    pub fn add(&mut self, item: T) {
        self.elements.push(item);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes the element at the root.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the heap is empty.
    pub fn remove(&mut self) -> Result<T, CollectionError> {
        if self.elements.is_empty() {
            return Err(CollectionError::empty("BinaryHeap", "remove"));
        }
        let root = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Returns the element at the root.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        self.elements
            .first()
            .ok_or(CollectionError::empty("BinaryHeap", "peek"))
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterates in storage order, which is not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Drains the heap into a `Vec` in removal order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        std::iter::from_fn(|| self.remove().ok()).collect()
    }

    fn ranks_before(&self, left: usize, right: usize) -> bool {
        self.comparator
            .compare(&self.elements[left], &self.elements[right])
            == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.ranks_before(index, parent) {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.elements.len() {
                break;
            }
            let right = left + 1;
            let child = if right < self.elements.len() && self.ranks_before(right, left) {
                right
            } else {
                left
            };
            if !self.ranks_before(child, index) {
                break;
            }
            self.elements.swap(index, child);
            index = child;
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Collection for BinaryHeap<T, C> {
    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T, C: Comparator<T>> Queue<T> for BinaryHeap<T, C> {
    fn add(&mut self, item: T) {
        Self::add(self, item);
    }

    fn remove(&mut self) -> Result<T, CollectionError> {
        Self::remove(self)
    }
}

impl<T, C> FromIterator<T> for BinaryHeap<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::with_comparator(C::default());
        heap.extend(iter);
        heap
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}
