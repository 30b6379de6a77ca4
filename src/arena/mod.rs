//! Index-addressed node storage.
//!
//! Linked structures in this crate (hash chains, the linked list, the entry
//! order of `LinkedHashMap`) never hold pointers to each other. Nodes live in
//! an [`Arena`] and refer to one another by slot index, so unlinking a node
//! is a matter of rewriting a few indices and ownership stays with the
//! containing collection.
//!
//! Vacated slots are threaded onto a free list and reused by later inserts.

#![cfg_attr(not(all(feature = "linear", feature = "hashed")), allow(dead_code))]

mod links;

pub(crate) use links::{LinkedSlots, LinkedSlotsIter};

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// A slab of nodes addressed by stable `usize` handles.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    next_free: Option<usize>,
    length: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_free: None,
            length: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            next_free: None,
            length: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.length
    }

    /// Number of slots ever allocated, occupied or vacant. Handles are below it.
    pub(crate) const fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Stores `value` and returns its handle.
    pub(crate) fn insert(&mut self, value: T) -> usize {
        self.length += 1;
        match self.next_free {
            Some(index) => {
                self.next_free = match &self.slots[index] {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {index}"),
                };
                self.slots[index] = Slot::Occupied(value);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            }
        }
    }

    /// Takes the value out of `index`, leaving the slot free for reuse.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        match self.slots.get(index) {
            Some(Slot::Occupied(_)) => {}
            _ => return None,
        }
        let vacated = Slot::Vacant {
            next_free: self.next_free,
        };
        match std::mem::replace(&mut self.slots[index], vacated) {
            Slot::Occupied(value) => {
                self.next_free = Some(index);
                self.length -= 1;
                Some(value)
            }
            Slot::Vacant { .. } => unreachable!("slot {index} was checked to be occupied"),
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Iterates the occupied slots in slot order, yielding `(handle, &mut value)`.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied(value) => Some((index, value)),
                Slot::Vacant { .. } => None,
            })
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.next_free = None;
        self.length = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("dangling arena handle {index}"),
        }
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("dangling arena handle {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_insert_returns_distinct_handles() {
        let mut arena = Arena::new();
        let first = arena.insert("a");
        let second = arena.insert("b");

        assert_ne!(first, second);
        assert_eq!(arena[first], "a");
        assert_eq!(arena[second], "b");
        assert_eq!(arena.len(), 2);
    }

    #[rstest]
    fn test_remove_frees_slot_for_reuse() {
        let mut arena = Arena::new();
        let first = arena.insert(1);
        let _second = arena.insert(2);

        assert_eq!(arena.remove(first), Some(1));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(first), None);

        let reused = arena.insert(3);
        assert_eq!(reused, first);
        assert_eq!(arena[reused], 3);
    }

    #[rstest]
    fn test_remove_twice_is_none() {
        let mut arena = Arena::new();
        let handle = arena.insert(1);

        assert_eq!(arena.remove(handle), Some(1));
        assert_eq!(arena.remove(handle), None);
        assert_eq!(arena.remove(99), None);
        assert_eq!(arena.len(), 0);
    }

    #[rstest]
    fn test_free_list_is_last_in_first_out() {
        let mut arena = Arena::with_capacity(4);
        let handles: Vec<usize> = (0..4).map(|value| arena.insert(value)).collect();
        arena.remove(handles[1]);
        arena.remove(handles[3]);

        assert_eq!(arena.insert(10), handles[3]);
        assert_eq!(arena.insert(11), handles[1]);
        assert_eq!(arena.insert(12), 4);
    }

    #[rstest]
    fn test_iter_mut_skips_vacant_slots() {
        let mut arena = Arena::new();
        let handles: Vec<usize> = (1..=3).map(|value| arena.insert(value)).collect();
        arena.remove(handles[1]);

        for (_, value) in arena.iter_mut() {
            *value *= 10;
        }

        let visited: Vec<usize> = arena.iter_mut().map(|(handle, _)| handle).collect();
        assert_eq!(visited, vec![handles[0], handles[2]]);
        assert_eq!(arena[handles[2]], 30);
    }

    #[rstest]
    fn test_slot_count_covers_vacant_slots_until_clear() {
        let mut arena = Arena::new();
        let handles: Vec<usize> = (0..4).map(|value| arena.insert(value)).collect();
        arena.remove(handles[3]);
        arena.remove(handles[0]);

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.slot_count(), 4);

        arena.insert(9);
        assert_eq!(arena.slot_count(), 4);

        arena.clear();
        assert_eq!(arena.slot_count(), 0);
    }

    #[rstest]
    #[should_panic(expected = "dangling arena handle 0")]
    fn test_index_vacant_slot_panics() {
        let mut arena = Arena::new();
        let handle = arena.insert(1);
        arena.remove(handle);
        let _value = arena[handle];
    }
}
