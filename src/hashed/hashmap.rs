//! Separate-chaining hash map.
//!
//! Keys are distributed over a table of buckets by `hash(key) % buckets`.
//! Each bucket holds the head of a singly linked chain whose nodes live in a
//! shared arena and point at their successor by handle.
//!
//! # Resizing
//!
//! Before a new key is inserted, the map checks whether the load factor
//! *after* the insert, `(len + 1) / buckets`, would exceed `max_load_factor`.
//! If so the table doubles and every node is re-appended to the tail of its
//! new chain, which keeps the relative order of nodes that share a bucket.
//! The table never shrinks.
//!
//! # Time Complexity
//!
//! | Operation      | Average        | Worst |
//! |----------------|----------------|-------|
//! | `get`          | O(1)           | O(n)  |
//! | `put`          | O(1) amortized | O(n)  |
//! | `remove`       | O(1)           | O(n)  |
//! | `len`          | O(1)           | O(1)  |

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

use super::{DefaultHashBuilder, HashMapConfig};
use crate::CollectionError;
use crate::arena::Arena;
use crate::traits::{Collection, Map};

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    next: Option<usize>,
}

/// A hash map with separate chaining and a configurable load factor.
///
/// # Examples
///
/// ```rust
/// use corral::hashed::HashMap;
///
/// let mut map = HashMap::new();
/// assert_eq!(map.put("one", 1), None);
/// assert_eq!(map.put("one", 10), Some(1));
///
/// assert_eq!(map.get("one"), Some(&10));
/// assert_eq!(map.remove("one"), Some(10));
/// assert!(map.is_empty());
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Option<usize>>,
    nodes: Arena<Node<K, V>>,
    max_load_factor: f64,
    hash_builder: S,
}

impl<K, V> HashMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(HashMapConfig::default(), DefaultHashBuilder::default())
    }

    /// Creates an empty map with `capacity` buckets and the default load factor.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let config = HashMapConfig {
            initial_capacity: capacity,
            ..HashMapConfig::default()
        };
        Self::from_parts(config, DefaultHashBuilder::default())
    }

    /// Creates an empty map from a configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if the load factor is
    /// not finite and positive.
    pub fn with_config(config: HashMapConfig) -> Result<Self, CollectionError> {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::from_parts(HashMapConfig::default(), hash_builder)
    }

    /// Creates an empty map from a configuration record and a hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if the load factor is
    /// not finite and positive.
    pub fn with_config_and_hasher(
        config: HashMapConfig,
        hash_builder: S,
    ) -> Result<Self, CollectionError> {
        config.validate()?;
        Ok(Self::from_parts(config, hash_builder))
    }

    fn from_parts(config: HashMapConfig, hash_builder: S) -> Self {
        let bucket_count = config.initial_capacity.max(1);
        Self {
            buckets: vec![None; bucket_count],
            nodes: Arena::with_capacity(config.initial_capacity),
            max_load_factor: config.max_load_factor,
            hash_builder,
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Returns the number of buckets.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns entries per bucket.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.buckets.len() as f64
    }

    /// Returns the load factor above which the table doubles.
    #[must_use]
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Returns the map's hash builder.
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        self.buckets.fill(None);
        self.nodes.clear();
    }

    /// Iterates `(key, value)` pairs bucket by bucket.
    ///
    /// The order depends on the hash builder and is not a stable contract.
    pub fn iter(&self) -> HashMapIterator<'_, K, V> {
        HashMapIterator {
            buckets: self.buckets.iter(),
            nodes: &self.nodes,
            cursor: None,
            remaining: self.len(),
        }
    }

    /// Iterates the keys in [`iter`](Self::iter) order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates the values in [`iter`](Self::iter) order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Iterates mutable references to the values in [`iter`](Self::iter) order.
    ///
    /// Builds a handle index over the node arena first, so each call costs
    /// O(slots): the most entries held at once since the last
    /// [`clear`](Self::clear), not just the current length.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        let length = self.nodes.len();
        let mut by_handle: Vec<Option<&mut Node<K, V>>> = Vec::new();
        by_handle.resize_with(self.nodes.slot_count(), || None);
        for (handle, node) in self.nodes.iter_mut() {
            by_handle[handle] = Some(node);
        }

        let mut ordered = Vec::with_capacity(length);
        for head in &self.buckets {
            let mut cursor = *head;
            while let Some(handle) = cursor {
                let Some(Node { value, next, .. }) = by_handle[handle].take() else {
                    unreachable!("hash chain visits node {handle} twice");
                };
                cursor = *next;
                ordered.push(value);
            }
        }
        ValuesMut {
            inner: ordered.into_iter(),
        }
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        for bucket in 0..self.buckets.len() {
            let mut previous = None;
            let mut cursor = self.buckets[bucket];
            while let Some(handle) = cursor {
                let node = &mut self.nodes[handle];
                let next = node.next;
                if keep(&node.key, &mut node.value) {
                    previous = Some(handle);
                } else {
                    self.unlink(bucket, previous, next);
                    self.nodes.remove(handle);
                }
                cursor = next;
            }
        }
    }

    /// Points whatever precedes a node in `bucket` at `next`.
    fn unlink(&mut self, bucket: usize, previous: Option<usize>, next: Option<usize>) {
        match previous {
            Some(previous) => self.nodes[previous].next = next,
            None => self.buckets[bucket] = next,
        }
    }

    /// Appends an unlinked node to the tail of `bucket`'s chain.
    fn append_to_bucket(&mut self, bucket: usize, handle: usize) {
        let Some(mut cursor) = self.buckets[bucket] else {
            self.buckets[bucket] = Some(handle);
            return;
        };
        while let Some(next) = self.nodes[cursor].next {
            cursor = next;
        }
        self.nodes[cursor].next = Some(handle);
    }

    fn handles_in_bucket_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len());
        for head in &self.buckets {
            let mut cursor = *head;
            while let Some(handle) = cursor {
                order.push(handle);
                cursor = self.nodes[handle].next;
            }
        }
        order
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_of<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize
    }

    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cursor = self.buckets[self.bucket_of(key)];
        while let Some(handle) = cursor {
            let node = &self.nodes[handle];
            if node.key.borrow() == key {
                return Some(handle);
            }
            cursor = node.next;
        }
        None
    }

    /// Returns the value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|handle| &self.nodes[handle].value)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|handle| {
            let node = &self.nodes[handle];
            (&node.key, &node.value)
        })
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|handle| &mut self.nodes[handle].value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Stores `value` under `key`.
    ///
    /// An existing entry keeps its chain position and has its value replaced;
    /// the old value is returned. A new entry may first trigger a resize and
    /// is then appended to the tail of its chain.
    ///
    /// The table doubles as many times as the new entry needs to stay within
    /// the maximum load factor, rehashing once at the final size.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(handle) = self.find(&key) {
            return Some(std::mem::replace(&mut self.nodes[handle].value, value));
        }
        let mut bucket_count = self.buckets.len();
        while self.would_exceed_load_factor(self.len() + 1, bucket_count) {
            bucket_count *= 2;
        }
        if bucket_count != self.buckets.len() {
            self.resize(bucket_count);
        }
        let bucket = self.bucket_of(&key);
        let handle = self.nodes.insert(Node {
            key,
            value,
            next: None,
        });
        self.append_to_bucket(bucket, handle);
        None
    }

    /// Alias of [`put`](Self::put).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    /// Removes `key` and returns its value. The table is never shrunk.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = self.bucket_of(key);
        let mut previous = None;
        let mut cursor = self.buckets[bucket];
        while let Some(handle) = cursor {
            let node = &self.nodes[handle];
            let next = node.next;
            if node.key.borrow() == key {
                self.unlink(bucket, previous, next);
                return self.nodes.remove(handle).map(|node| node.value);
            }
            previous = Some(handle);
            cursor = next;
        }
        None
    }

    #[allow(clippy::cast_precision_loss)]
    fn would_exceed_load_factor(&self, entries: usize, bucket_count: usize) -> bool {
        entries as f64 / bucket_count as f64 > self.max_load_factor
    }

    /// Rebuilds the table with `bucket_count` buckets.
    fn resize(&mut self, bucket_count: usize) {
        tracing::trace!(
            from = self.buckets.len(),
            to = bucket_count,
            len = self.len(),
            "rehashing hash map"
        );
        let old_buckets = std::mem::replace(&mut self.buckets, vec![None; bucket_count]);
        for head in old_buckets {
            let mut cursor = head;
            while let Some(handle) = cursor {
                cursor = self.nodes[handle].next.take();
                let bucket = self.bucket_of(&self.nodes[handle].key);
                self.append_to_bucket(bucket, handle);
            }
        }
    }
}

impl<K, V, S: Default> Default for HashMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<K, V, S> Map<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
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

impl<K, Q, V, S> Index<&Q> for HashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in HashMap"),
        }
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the entries of a [`HashMap`].
pub struct HashMapIterator<'a, K, V> {
    buckets: std::slice::Iter<'a, Option<usize>>,
    nodes: &'a Arena<Node<K, V>>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<K, V> Clone for HashMapIterator<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            nodes: self.nodes,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for HashMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(handle) = self.cursor {
                let nodes = self.nodes;
                let node = &nodes[handle];
                self.cursor = node.next;
                self.remaining -= 1;
                return Some((&node.key, &node.value));
            }
            self.cursor = *self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for HashMapIterator<'_, K, V> {}

/// Iterator over the keys of a [`HashMap`].
#[derive(Clone)]
pub struct Keys<'a, K, V> {
    inner: HashMapIterator<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`HashMap`].
#[derive(Clone)]
pub struct Values<'a, K, V> {
    inner: HashMapIterator<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// Iterator over mutable references to the values of a [`HashMap`].
pub struct ValuesMut<'a, V> {
    inner: std::vec::IntoIter<&'a mut V>,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}

/// Owning iterator over the entries of a [`HashMap`].
pub struct HashMapIntoIterator<K, V> {
    nodes: Arena<Node<K, V>>,
    order: std::vec::IntoIter<usize>,
}

impl<K, V> Iterator for HashMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.order.next()?;
        self.nodes.remove(handle).map(|node| (node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> ExactSizeIterator for HashMapIntoIterator<K, V> {}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = HashMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let order = self.handles_in_bucket_order();
        HashMapIntoIterator {
            nodes: self.nodes,
            order: order.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = HashMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for HashMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct HashMapVisitor<K, V, S> {
    marker: std::marker::PhantomData<(K, V, S)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::de::Visitor<'de> for HashMapVisitor<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = HashMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = HashMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for HashMap<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(HashMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
