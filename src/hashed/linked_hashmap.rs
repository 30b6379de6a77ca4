//! Hash map with a predictable iteration order.
//!
//! [`LinkedHashMap`] pairs a [`HashMap`] from key to entry handle with a
//! doubly linked list of entries. The list order is either the order in which
//! keys were first inserted or, in access order, least recently used first.
//! With a `max_entries` bound the map evicts from the head of the list, which
//! turns an access-ordered map into an LRU cache.
//!
//! # Examples
//!
//! ```rust
//! use corral::hashed::{KeyOrder, LinkedHashMap, LinkedHashMapConfig};
//!
//! let config = LinkedHashMapConfig {
//!     order: KeyOrder::Access,
//!     max_entries: Some(2),
//! };
//! let mut cache = LinkedHashMap::with_config(config).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get("a");
//! cache.put("c", 3);
//!
//! assert!(!cache.contains_key("b"));
//! assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{DefaultHashBuilder, HashMap};
use crate::CollectionError;
use crate::arena::{LinkedSlots, LinkedSlotsIter};
use crate::traits::{self, Collection};

/// Order in which a [`LinkedHashMap`] keeps its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum KeyOrder {
    /// Order of first insertion. Updating an existing key keeps its position.
    #[default]
    Insertion,
    /// Least recently read or written first.
    Access,
}

/// Ordering and bound of a [`LinkedHashMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LinkedHashMapConfig {
    /// Entry order.
    pub order: KeyOrder,
    /// Maximum number of entries kept; `None` is unbounded. Zero is rejected.
    pub max_entries: Option<usize>,
}

impl LinkedHashMapConfig {
    /// Checks that the configuration can be honoured.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if `max_entries` is zero.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.max_entries == Some(0) {
            return Err(CollectionError::InvalidConfiguration(
                "max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A hash map that iterates in insertion or access order.
///
/// Keys are stored both in the hash index and in the entry list, so `put`
/// requires `K: Clone`.
///
/// # Time Complexity
///
/// | Operation  | Complexity      |
/// |------------|-----------------|
/// | `put`      | O(1) average    |
/// | `get`      | O(1) average    |
/// | `remove`   | O(1) average    |
/// | `eldest`   | O(1)            |
#[derive(Clone)]
pub struct LinkedHashMap<K, V, S = DefaultHashBuilder> {
    index: HashMap<K, usize, S>,
    entries: LinkedSlots<(K, V)>,
    order: KeyOrder,
    max_entries: Option<usize>,
}

impl<K, V> LinkedHashMap<K, V, DefaultHashBuilder> {
    /// Creates an unbounded, insertion-ordered map.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(LinkedHashMapConfig::default(), DefaultHashBuilder::default())
    }

    /// Creates a map from a configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if `max_entries` is zero.
    pub fn with_config(config: LinkedHashMapConfig) -> Result<Self, CollectionError> {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> LinkedHashMap<K, V, S> {
    /// Creates a map from a configuration record and a hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if `max_entries` is zero.
    pub fn with_config_and_hasher(
        config: LinkedHashMapConfig,
        hash_builder: S,
    ) -> Result<Self, CollectionError> {
        config.validate()?;
        Ok(Self::with_parts(config, hash_builder))
    }

    fn with_parts(config: LinkedHashMapConfig, hash_builder: S) -> Self {
        Self {
            index: HashMap::with_hasher(hash_builder),
            entries: LinkedSlots::new(),
            order: config.order,
            max_entries: config.max_entries,
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    /// Returns the entry order this map maintains.
    #[must_use]
    pub const fn order(&self) -> KeyOrder {
        self.order
    }

    /// Returns the entry bound, if any.
    #[must_use]
    pub const fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    /// Returns the entry at the head of the order, the next to be evicted.
    #[must_use]
    pub fn eldest(&self) -> Option<(&K, &V)> {
        self.entries.head().map(|handle| {
            let (key, value) = self.entries.get(handle);
            (key, value)
        })
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
    }

    /// Iterates entries from eldest to newest.
    #[must_use]
    pub const fn iter(&self) -> LinkedHashMapIterator<'_, K, V> {
        LinkedHashMapIterator {
            inner: self.entries.iter(),
        }
    }

    /// Iterates keys from eldest to newest.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates values from eldest to newest.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, value)| value)
    }

    fn promote(&mut self, handle: usize) {
        if self.order == KeyOrder::Access {
            self.entries.move_to_back(handle);
        }
    }
}

impl<K, V, S> LinkedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Stores `value` under `key` and returns the value it replaced.
    ///
    /// A new key goes to the tail of the order; if the map then holds more
    /// than `max_entries` entries, the eldest entries are evicted. In access
    /// order an existing key is also moved to the tail.
    pub fn put(&mut self, key: K, value: V) -> Option<V>
    where
        K: Clone,
    {
        if let Some(&handle) = self.index.get(&key) {
            let previous = std::mem::replace(&mut self.entries.get_mut(handle).1, value);
            self.promote(handle);
            return Some(previous);
        }
        let handle = self.entries.push_back((key.clone(), value));
        self.index.put(key, handle);
        self.evict_overflow();
        None
    }

    /// Returns the value for `key`, moving the entry to the tail in access order.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        self.promote(handle);
        Some(&self.entries.get(handle).1)
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        self.promote(handle);
        Some(&mut self.entries.get_mut(handle).1)
    }

    /// Returns the value for `key` without touching the order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        Some(&self.entries.get(handle).1)
    }

    /// Returns `true` if `key` is present. Does not touch the order.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.remove(key)?;
        let (_, value) = self.entries.unlink(handle);
        Some(value)
    }

    /// Removes and returns the eldest entry.
    pub fn pop_eldest(&mut self) -> Option<(K, V)> {
        let (key, value) = self.entries.pop_front()?;
        self.index.remove(&key);
        Some((key, value))
    }

    fn evict_overflow(&mut self) {
        let Some(limit) = self.max_entries else {
            return;
        };
        while self.len() > limit {
            if self.pop_eldest().is_none() {
                break;
            }
            tracing::debug!(
                max_entries = limit,
                len = self.len(),
                "evicted eldest linked hash map entry"
            );
        }
    }
}

impl<K, V> Default for LinkedHashMap<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Collection for LinkedHashMap<K, V, S> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Reads through the [`Map`](traits::Map) view never reorder entries; use
/// [`LinkedHashMap::get`] for access-order promotion.
impl<K, V, S> traits::Map<K, V> for LinkedHashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn get(&self, key: &K) -> Option<&V> {
        self.peek(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        Self::put(self, key, value)
    }

    fn remove_key(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }
}

impl<K, V, S> PartialEq for LinkedHashMap<K, V, S>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, S> Eq for LinkedHashMap<K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for LinkedHashMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for LinkedHashMap<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for LinkedHashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Iterator over a [`LinkedHashMap`] from eldest to newest entry.
#[derive(Clone)]
pub struct LinkedHashMapIterator<'a, K, V> {
    inner: LinkedSlotsIter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for LinkedHashMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, (key, value))| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for LinkedHashMapIterator<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, (key, value))| (key, value))
    }
}

impl<K, V> ExactSizeIterator for LinkedHashMapIterator<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a LinkedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = LinkedHashMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn keys<K: Clone, V, S>(map: &LinkedHashMap<K, V, S>) -> Vec<K> {
        map.keys().cloned().collect()
    }

    fn bounded(order: KeyOrder, max_entries: usize) -> LinkedHashMap<&'static str, i32> {
        LinkedHashMap::with_config(LinkedHashMapConfig {
            order,
            max_entries: Some(max_entries),
        })
        .unwrap()
    }

    #[rstest]
    fn test_insertion_order_survives_updates_and_reads() {
        let mut map = LinkedHashMap::new();
        map.put("c", 3);
        map.put("a", 1);
        map.put("b", 2);

        assert_eq!(map.put("c", 30), Some(3));
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(keys(&map), vec!["c", "a", "b"]);
    }

    #[rstest]
    fn test_access_order_promotes_on_get_and_put() {
        let mut map = LinkedHashMap::with_config(LinkedHashMapConfig {
            order: KeyOrder::Access,
            max_entries: None,
        })
        .unwrap();
        for (key, value) in [("a", 1), ("b", 2), ("c", 3)] {
            map.put(key, value);
        }

        map.get("a");
        assert_eq!(keys(&map), vec!["b", "c", "a"]);
        map.put("b", 20);
        assert_eq!(keys(&map), vec!["c", "a", "b"]);
        map.peek("c");
        assert_eq!(keys(&map), vec!["c", "a", "b"]);
    }

    #[rstest]
    #[case::insertion(KeyOrder::Insertion, vec!["b", "c"])]
    #[case::access(KeyOrder::Access, vec!["a", "c"])]
    fn test_bounded_map_evicts_eldest(#[case] order: KeyOrder, #[case] expected: Vec<&str>) {
        let mut map = bounded(order, 2);
        map.put("a", 1);
        map.put("b", 2);
        map.get("a");
        map.put("c", 3);

        assert_eq!(map.len(), 2);
        assert_eq!(keys(&map), expected);
    }

    #[rstest]
    fn test_updating_existing_key_never_evicts() {
        let mut map = bounded(KeyOrder::Insertion, 1);
        map.put("only", 1);
        assert_eq!(map.put("only", 2), Some(1));
        assert_eq!(map.eldest(), Some((&"only", &2)));
    }

    #[rstest]
    fn test_zero_max_entries_is_rejected() {
        let config = LinkedHashMapConfig {
            max_entries: Some(0),
            ..LinkedHashMapConfig::default()
        };
        assert!(matches!(
            LinkedHashMap::<i32, i32>::with_config(config),
            Err(CollectionError::InvalidConfiguration(_))
        ));
    }

    #[rstest]
    fn test_remove_and_pop_eldest() {
        let mut map: LinkedHashMap<i32, char> = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();

        assert_eq!(map.remove(&2), Some('b'));
        assert_eq!(map.remove(&2), None);
        assert_eq!(map.pop_eldest(), Some((1, 'a')));
        assert!(!map.contains_key(&1));
        assert_eq!(keys(&map), vec![3]);
    }

    #[rstest]
    fn test_iteration_is_double_ended() {
        let map: LinkedHashMap<i32, i32> = (1..=3).map(|key| (key, key * key)).collect();
        let backwards: Vec<i32> = map.values().rev().copied().collect();
        assert_eq!(backwards, vec![9, 4, 1]);
    }
}
