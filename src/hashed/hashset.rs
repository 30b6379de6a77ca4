//! Hash set built on [`HashMap`].

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{DefaultHashBuilder, HashMap, HashMapConfig, Keys};
use crate::CollectionError;
use crate::traits::Collection;

/// A set of unique elements, stored as the keys of a [`HashMap`].
///
/// # Examples
///
/// ```rust
/// use corral::hashed::HashSet;
///
/// let mut set = HashSet::new();
/// assert!(set.add(1));
/// assert!(!set.add(1));
///
/// set.add_all([2, 3, 4]);
/// set.retain_all(&[2, 4, 6]);
///
/// let mut remaining = set.to_vec();
/// remaining.sort_unstable();
/// assert_eq!(remaining, vec![2, 4]);
/// ```
#[derive(Clone)]
pub struct HashSet<T, S = DefaultHashBuilder> {
    map: HashMap<T, (), S>,
}

impl<T> HashSet<T, DefaultHashBuilder> {
    /// Creates an empty set with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Creates an empty set with `capacity` buckets.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Creates an empty set from a configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if the load factor is
    /// not finite and positive.
    pub fn with_config(config: HashMapConfig) -> Result<Self, CollectionError> {
        Ok(Self {
            map: HashMap::with_config(config)?,
        })
    }
}

impl<T, S> HashSet<T, S> {
    /// Creates an empty set that hashes elements with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: HashMap::with_hasher(hash_builder),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterates the elements in bucket order.
    pub fn iter(&self) -> HashSetIterator<'_, T> {
        HashSetIterator {
            keys: self.map.keys(),
        }
    }

    /// Copies the elements into a `Vec` in iteration order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Adds `item`, returning `true` if it was not already present.
    pub fn add(&mut self, item: T) -> bool {
        self.map.put(item, ()).is_none()
    }

    /// Alias of [`add`](Self::add).
    pub fn insert(&mut self, item: T) -> bool {
        self.add(item)
    }

    /// Adds every element of `items`.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    /// Removes `item`, returning `true` if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(item).is_some()
    }

    /// Removes every element that appears in `items`.
    pub fn remove_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for item in items {
            self.remove(item);
        }
    }

    /// Keeps only the elements that also appear in `items`.
    ///
    /// `items` is hashed once up front, so the cost is linear in both sizes.
    pub fn retain_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let keep: HashSet<&T> = items.into_iter().collect();
        self.map.retain(|element, _| keep.contains(&element));
    }

    /// Keeps only the elements for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.map.retain(|element, _| keep(element));
    }

    /// Returns `true` if `item` is present.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(item)
    }
}

impl<T, S: Default> Default for HashSet<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> Collection for HashSet<T, S> {
    fn len(&self) -> usize {
        self.map.len()
    }
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> FromIterator<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.add_all(iter);
        set
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

/// Iterator over the elements of a [`HashSet`].
#[derive(Clone)]
pub struct HashSetIterator<'a, T> {
    keys: Keys<'a, T, ()>,
}

impl<'a, T> Iterator for HashSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> ExactSizeIterator for HashSetIterator<'_, T> {}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S> {
    type Item = &'a T;
    type IntoIter = HashSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for HashSet<T, S> {
    type Item = T;
    type IntoIter = std::iter::Map<super::HashMapIntoIterator<T, ()>, fn((T, ())) -> T>;

    fn into_iter(self) -> Self::IntoIter {
        let key: fn((T, ())) -> T = |(item, ())| item;
        self.map.into_iter().map(key)
    }
}

impl<T: fmt::Debug, S> fmt::Debug for HashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for HashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for HashSet<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
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
struct HashSetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for HashSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = HashSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = HashSet::default();
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for HashSet<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(HashSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sorted(set: &HashSet<i32>) -> Vec<i32> {
        let mut elements = set.to_vec();
        elements.sort_unstable();
        elements
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4], vec![2, 4, 8], vec![2, 4])]
    #[case(vec![1, 2], vec![], vec![])]
    #[case(vec![5], vec![5], vec![5])]
    fn test_retain_all_keeps_intersection(
        #[case] initial: Vec<i32>,
        #[case] keep: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let mut set: HashSet<i32> = initial.into_iter().collect();
        set.retain_all(&keep);
        assert_eq!(sorted(&set), expected);
    }

    #[rstest]
    fn test_retain_all_accepts_another_set() {
        let mut set: HashSet<i32> = (0..2000).collect();
        let evens: HashSet<i32> = (0..4000).step_by(2).collect();
        set.retain_all(&evens);

        assert_eq!(set.len(), 1000);
        assert!(set.iter().all(|item| item % 2 == 0));
    }

    #[rstest]
    fn test_remove_all() {
        let mut set: HashSet<i32> = (0..10).collect();
        set.remove_all(&[1, 3, 5, 7, 9, 11]);
        assert_eq!(sorted(&set), vec![0, 2, 4, 6, 8]);
    }

    #[rstest]
    fn test_add_and_remove_report_membership_change() {
        let mut set = HashSet::new();
        assert!(set.add("x"));
        assert!(!set.insert("x"));
        assert!(set.remove("x"));
        assert!(!set.remove("x"));
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_equality_ignores_insertion_order() {
        let left: HashSet<i32> = [1, 2, 3].into_iter().collect();
        let right: HashSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(left, right);
    }

    #[rstest]
    fn test_display_single_element() {
        let set: HashSet<i32> = std::iter::once(7).collect();
        assert_eq!(set.to_string(), "{7}");
    }
}
