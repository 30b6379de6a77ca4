//! Growable ring-buffer double-ended queue.
//!
//! This module provides [`ArrayDeque`], a deque stored in a fixed-size slot
//! array addressed by a `front` and a `back` cursor, both taken modulo the
//! capacity.
//!
//! # Overview
//!
//! - O(1) `add_front`, `add_back`, `remove_front`, `remove_back` (amortized)
//! - O(1) `peek_front`, `peek_back`, `len` and `is_empty`
//! - O(n) growth when an insert finds the buffer full
//!
//! # Growth Policy
//!
//! The buffer only grows when an insert finds it full, and never shrinks.
//! The new capacity is tiered on the current one:
//!
//! | Current capacity | New capacity  |
//! |------------------|---------------|
//! | 0                | 10            |
//! | below 512        | doubled       |
//! | below 2048       | grown by 50%  |
//! | 2048 and above   | grown by 25%  |
//!
//! Growing moves the logical contents to the start of the new buffer with two
//! bulk moves (the `[front, capacity)` run, then the `[0, front)` run) and
//! resets `front` to 0.
//!
//! # Examples
//!
//! ```rust
//! use corral::linear::ArrayDeque;
//!
//! let mut deque = ArrayDeque::new();
//! deque.add_back(2);
//! deque.add_back(3);
//! deque.add_front(1);
//!
//! assert_eq!(deque.to_vec(), vec![1, 2, 3]);
//! assert_eq!(deque.remove_back(), Ok(3));
//! assert_eq!(deque.peek_front(), Ok(&1));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::DequeConfig;
use crate::CollectionError;
use crate::traits::{Collection, Deque, Queue, Stack};

/// Capacity used when an insert reaches a zero-capacity deque.
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacities below this double on growth.
const DOUBLING_LIMIT: usize = 512;

/// Capacities below this (and at least [`DOUBLING_LIMIT`]) grow by half.
const HALF_GROWTH_LIMIT: usize = 2048;

/// Computes the capacity that follows `capacity` under the tiered policy.
pub(crate) const fn next_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_CAPACITY
    } else if capacity < DOUBLING_LIMIT {
        capacity * 2
    } else if capacity < HALF_GROWTH_LIMIT {
        capacity + capacity / 2
    } else {
        capacity + capacity / 4
    }
}

/// A double-ended queue backed by a growable ring buffer.
///
/// # Time Complexity
///
/// | Operation      | Complexity       |
/// |----------------|------------------|
/// | `add_front`    | O(1) amortized   |
/// | `add_back`     | O(1) amortized   |
/// | `remove_front` | O(1)             |
/// | `remove_back`  | O(1)             |
/// | `peek_front`   | O(1)             |
/// | `peek_back`    | O(1)             |
/// | `len`          | O(1)             |
///
/// # Examples
///
/// ```rust
/// use corral::linear::ArrayDeque;
///
/// let mut deque: ArrayDeque<i32> = (1..=10).collect();
/// for _ in 0..deque.len() / 2 {
///     let front = deque.remove_front().unwrap();
///     deque.add_back(front);
/// }
/// assert_eq!(deque.to_vec(), vec![6, 7, 8, 9, 10, 1, 2, 3, 4, 5]);
/// ```
#[derive(Clone)]
pub struct ArrayDeque<T> {
    /// Slot array; occupied slots hold `Some`
    slots: Vec<Option<T>>,
    /// Physical index of the first element
    front: usize,
    /// Physical index one past the last element
    back: usize,
    /// Number of occupied slots
    length: usize,
}

impl<T> ArrayDeque<T> {
    /// Creates an empty deque with the default initial capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::linear::ArrayDeque;
    ///
    /// let deque: ArrayDeque<i32> = ArrayDeque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 10);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DequeConfig::default())
    }

    /// Creates an empty deque with room for `capacity` elements.
    ///
    /// A capacity of zero is allowed; the first insert then allocates
    /// [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            front: 0,
            back: 0,
            length: 0,
        }
    }

    /// Creates an empty deque from a configuration record.
    #[must_use]
    pub fn with_config(config: DequeConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of slots in the ring buffer.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Inserts an element at the front, growing the buffer first if it is full.
    pub fn add_front(&mut self, item: T) {
        if self.is_full() {
            self.grow();
        }
        self.front = self.retreat(self.front);
        self.slots[self.front] = Some(item);
        self.length += 1;
    }

    /// Inserts an element at the back, growing the buffer first if it is full.
    pub fn add_back(&mut self, item: T) {
        if self.is_full() {
            self.grow();
        }
        self.slots[self.back] = Some(item);
        self.back = self.advance(self.back);
        self.length += 1;
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    pub fn remove_front(&mut self) -> Result<T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::empty("ArrayDeque", "remove_front"));
        }
        let item = self.take_slot(self.front);
        self.front = self.advance(self.front);
        self.length -= 1;
        Ok(item)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    pub fn remove_back(&mut self) -> Result<T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::empty("ArrayDeque", "remove_back"));
        }
        self.back = self.retreat(self.back);
        let item = self.take_slot(self.back);
        self.length -= 1;
        Ok(item)
    }

    /// Returns the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    pub fn peek_front(&self) -> Result<&T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::empty("ArrayDeque", "peek_front"));
        }
        Ok(self.slot(self.front))
    }

    /// Returns the back element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] if the deque is empty.
    pub fn peek_back(&self) -> Result<&T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::empty("ArrayDeque", "peek_back"));
        }
        Ok(self.slot(self.retreat(self.back)))
    }

    /// Drops every element and releases the buffer.
    ///
    /// The deque is left with zero capacity; the next insert allocates
    /// [`DEFAULT_CAPACITY`] slots.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.front = 0;
        self.back = 0;
        self.length = 0;
    }

    /// Returns an iterator from front to back.
    ///
    /// The iterator is double-ended, so `iter().rev()` walks from back to
    /// front. Only the `len()` occupied slots are visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::linear::ArrayDeque;
    ///
    /// let deque: ArrayDeque<i32> = (1..=3).collect();
    /// let backwards: Vec<&i32> = deque.iter().rev().collect();
    /// assert_eq!(backwards, vec![&3, &2, &1]);
    /// ```
    pub fn iter(&self) -> ArrayDequeIterator<'_, T> {
        ArrayDequeIterator {
            slots: &self.slots,
            front: self.front,
            remaining: self.length,
        }
    }

    /// Copies the logical contents, front to back, into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    const fn is_full(&self) -> bool {
        self.length == self.slots.len()
    }

    const fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    const fn retreat(&self, index: usize) -> usize {
        (index + self.slots.len() - 1) % self.slots.len()
    }

    fn slot(&self, index: usize) -> &T {
        match &self.slots[index] {
            Some(item) => item,
            None => unreachable!("ring buffer slot {index} inside the live range is vacant"),
        }
    }

    fn take_slot(&mut self, index: usize) -> T {
        match self.slots[index].take() {
            Some(item) => item,
            None => unreachable!("ring buffer slot {index} inside the live range is vacant"),
        }
    }

    fn grow(&mut self) {
        let new_capacity = next_capacity(self.capacity());
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.length,
            "growing ring buffer"
        );
        self.relocate(new_capacity);
    }

    /// Moves the live range to the start of a fresh buffer of `new_capacity` slots.
    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.length);
        let old_capacity = self.capacity();
        let tail_end = self.front + self.length.min(old_capacity - self.front);
        let head_end = self.length - (tail_end - self.front);

        let mut slots = Vec::with_capacity(new_capacity);
        slots.extend(self.slots.drain(self.front..tail_end));
        let tail_copied = slots.len();
        slots.extend(self.slots.drain(..head_end));
        let head_copied = slots.len() - tail_copied;
        assert_eq!(
            tail_copied + head_copied,
            self.length,
            "ring buffer relocation moved {tail_copied} + {head_copied} slots for {} elements",
            self.length
        );
        slots.resize_with(new_capacity, || None);

        self.slots = slots;
        self.front = 0;
        self.back = self.length % new_capacity;
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for ArrayDeque<T> {
    fn len(&self) -> usize {
        self.length
    }
}

impl<T> Queue<T> for ArrayDeque<T> {
    fn add(&mut self, item: T) {
        self.add_back(item);
    }

    fn remove(&mut self) -> Result<T, CollectionError> {
        self.remove_front()
    }
}

impl<T> Stack<T> for ArrayDeque<T> {
    fn push(&mut self, item: T) {
        self.add_front(item);
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        self.remove_front()
    }
}

impl<T> Deque<T> for ArrayDeque<T> {
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

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over an [`ArrayDeque`], front to back.
pub struct ArrayDequeIterator<'a, T> {
    slots: &'a [Option<T>],
    front: usize,
    remaining: usize,
}

impl<T> Clone for ArrayDequeIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> ArrayDequeIterator<'a, T> {
    fn occupied(&self, index: usize) -> &'a T {
        match &self.slots[index] {
            Some(item) => item,
            None => unreachable!("ring buffer slot {index} inside the live range is vacant"),
        }
    }
}

impl<'a, T> Iterator for ArrayDequeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.occupied(self.front);
        self.front = (self.front + 1) % self.slots.len();
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for ArrayDequeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = (self.front + self.remaining - 1) % self.slots.len();
        self.remaining -= 1;
        Some(self.occupied(index))
    }
}

impl<T> ExactSizeIterator for ArrayDequeIterator<'_, T> {}

impl<T> FusedIterator for ArrayDequeIterator<'_, T> {}

/// Owning iterator over an [`ArrayDeque`], front to back.
pub struct ArrayDequeIntoIterator<T> {
    deque: ArrayDeque<T>,
}

impl<T> Iterator for ArrayDequeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.remove_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for ArrayDequeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.remove_back().ok()
    }
}

impl<T> ExactSizeIterator for ArrayDequeIntoIterator<T> {}

impl<T> IntoIterator for ArrayDeque<T> {
    type Item = T;
    type IntoIter = ArrayDequeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ArrayDequeIntoIterator { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a ArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = ArrayDequeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for ArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut deque = Self::with_capacity(lower.max(DEFAULT_CAPACITY));
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for ArrayDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_back(item);
        }
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<T: PartialEq> PartialEq for ArrayDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayDeque<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayDeque<T> {
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

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ArrayDeque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ArrayDequeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ArrayDequeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = ArrayDeque<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut deque = ArrayDeque::with_capacity(capacity.max(DEFAULT_CAPACITY));
        while let Some(element) = seq.next_element()? {
            deque.add_back(element);
        }
        Ok(deque)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ArrayDeque<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ArrayDequeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
