//! A doubly linked sequence whose nodes live in an [`Arena`].

use super::Arena;

#[derive(Debug, Clone)]
struct Link<T> {
    value: T,
    previous: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked list over arena slots.
///
/// Handles returned by the `push_*` methods stay valid until the element is
/// unlinked, which lets an external index (such as the key table of a
/// `LinkedHashMap`) jump straight to a node.
#[derive(Debug, Clone)]
pub(crate) struct LinkedSlots<T> {
    links: Arena<Link<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> LinkedSlots<T> {
    pub(crate) const fn new() -> Self {
        Self {
            links: Arena::new(),
            head: None,
            tail: None,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.links.len()
    }

    pub(crate) const fn head(&self) -> Option<usize> {
        self.head
    }

    pub(crate) const fn tail(&self) -> Option<usize> {
        self.tail
    }

    pub(crate) fn get(&self, handle: usize) -> &T {
        &self.links[handle].value
    }

    pub(crate) fn get_mut(&mut self, handle: usize) -> &mut T {
        &mut self.links[handle].value
    }

    pub(crate) fn push_front(&mut self, value: T) -> usize {
        let handle = self.links.insert(Link {
            value,
            previous: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.links[old_head].previous = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        handle
    }

    pub(crate) fn push_back(&mut self, value: T) -> usize {
        let handle = self.links.insert(Link {
            value,
            previous: self.tail,
            next: None,
        });
        self.attach_after_tail(handle);
        handle
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.head.map(|handle| self.unlink(handle))
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|handle| self.unlink(handle))
    }

    /// Removes the node behind `handle` and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not refer to a live node.
    pub(crate) fn unlink(&mut self, handle: usize) -> T {
        self.detach(handle);
        match self.links.remove(handle) {
            Some(link) => link.value,
            None => panic!("dangling arena handle {handle}"),
        }
    }

    /// Moves the node behind `handle` to the back of the sequence.
    pub(crate) fn move_to_back(&mut self, handle: usize) {
        if self.tail == Some(handle) {
            return;
        }
        self.detach(handle);
        self.links[handle].previous = self.tail;
        self.attach_after_tail(handle);
    }

    pub(crate) fn clear(&mut self) {
        self.links.clear();
        self.head = None;
        self.tail = None;
    }

    pub(crate) const fn iter(&self) -> LinkedSlotsIter<'_, T> {
        LinkedSlotsIter {
            links: &self.links,
            front: self.head,
            back: self.tail,
            remaining: self.links.len(),
        }
    }

    /// Splices `handle` (whose `previous` already points at the tail) onto the back.
    fn attach_after_tail(&mut self, handle: usize) {
        self.links[handle].next = None;
        match self.tail {
            Some(old_tail) => self.links[old_tail].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
    }

    /// Bridges the neighbours of `handle` over it without freeing the slot.
    fn detach(&mut self, handle: usize) {
        let Link { previous, next, .. } = self.links[handle];
        match previous {
            Some(previous) => self.links[previous].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.links[next].previous = previous,
            None => self.tail = previous,
        }
        let link = &mut self.links[handle];
        link.previous = None;
        link.next = None;
    }
}

impl<T> Default for LinkedSlots<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over [`LinkedSlots`] from head to tail, yielding `(handle, &value)`.
#[derive(Debug)]
pub(crate) struct LinkedSlotsIter<'a, T> {
    links: &'a Arena<Link<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<T> Clone for LinkedSlotsIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            links: self.links,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for LinkedSlotsIter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        let link = &self.links[handle];
        self.front = link.next;
        self.remaining -= 1;
        Some((handle, &link.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for LinkedSlotsIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        let link = &self.links[handle];
        self.back = link.previous;
        self.remaining -= 1;
        Some((handle, &link.value))
    }
}

impl<T> ExactSizeIterator for LinkedSlotsIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values<T: Clone>(slots: &LinkedSlots<T>) -> Vec<T> {
        slots.iter().map(|(_, value)| value.clone()).collect()
    }

    #[rstest]
    fn test_push_both_ends() {
        let mut slots = LinkedSlots::new();
        slots.push_back(2);
        slots.push_back(3);
        slots.push_front(1);

        assert_eq!(values(&slots), vec![1, 2, 3]);
        assert_eq!(slots.len(), 3);
    }

    #[rstest]
    fn test_unlink_middle_head_and_tail() {
        let mut slots = LinkedSlots::new();
        let handles: Vec<usize> = (1..=5).map(|value| slots.push_back(value)).collect();

        assert_eq!(slots.unlink(handles[2]), 3);
        assert_eq!(values(&slots), vec![1, 2, 4, 5]);
        assert_eq!(slots.unlink(handles[0]), 1);
        assert_eq!(slots.unlink(handles[4]), 5);
        assert_eq!(values(&slots), vec![2, 4]);
        assert_eq!(slots.head(), Some(handles[1]));
        assert_eq!(slots.tail(), Some(handles[3]));
    }

    #[rstest]
    fn test_unlink_last_element_empties() {
        let mut slots = LinkedSlots::new();
        let handle = slots.push_back("only");

        assert_eq!(slots.unlink(handle), "only");
        assert_eq!(slots.len(), 0);
        assert_eq!(slots.head(), None);
        assert_eq!(slots.tail(), None);
        assert_eq!(slots.pop_front(), None);
    }

    #[rstest]
    #[case(0, vec![2, 3, 1])]
    #[case(1, vec![1, 3, 2])]
    #[case(2, vec![1, 2, 3])]
    fn test_move_to_back(#[case] position: usize, #[case] expected: Vec<i32>) {
        let mut slots = LinkedSlots::new();
        let handles: Vec<usize> = (1..=3).map(|value| slots.push_back(value)).collect();

        slots.move_to_back(handles[position]);

        assert_eq!(values(&slots), expected);
        assert_eq!(slots.tail(), Some(handles[position]));
    }

    #[rstest]
    fn test_iter_from_both_ends_meets_in_middle() {
        let mut slots = LinkedSlots::new();
        for value in 1..=4 {
            slots.push_back(value);
        }
        let mut iter = slots.iter();

        assert_eq!(iter.next().map(|(_, value)| *value), Some(1));
        assert_eq!(iter.next_back().map(|(_, value)| *value), Some(4));
        assert_eq!(iter.next().map(|(_, value)| *value), Some(2));
        assert_eq!(iter.next_back().map(|(_, value)| *value), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[rstest]
    fn test_pop_back_and_reuse() {
        let mut slots = LinkedSlots::new();
        slots.push_back('a');
        slots.push_back('b');

        assert_eq!(slots.pop_back(), Some('b'));
        slots.push_back('c');
        assert_eq!(values(&slots), vec!['a', 'c']);
    }
}
