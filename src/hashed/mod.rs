//! Hash-based collections.
//!
//! - [`HashMap`]: separate-chaining hash map with a configurable load factor
//! - [`HashSet`]: a set view over [`HashMap`]
//! - [`LinkedHashMap`]: a hash map that remembers insertion or access order
//!   and can evict its eldest entry
//!
//! All three are generic over a [`BuildHasher`](std::hash::BuildHasher).
//! The default, [`DefaultHashBuilder`], is `std`'s randomly seeded
//! `RandomState`, or `rustc_hash::FxBuildHasher` with the `fxhash` feature.
//! A map hashes keys through their [`Hash`](std::hash::Hash) impl only, and
//! keeps the same builder for its whole lifetime, so equal keys always land
//! in the same bucket.
//!
//! # Examples
//!
//! ```rust
//! use corral::hashed::{HashMap, HashSet};
//!
//! let mut ages = HashMap::new();
//! ages.put("ada", 36);
//! ages.put("alan", 41);
//! assert_eq!(ages.get("ada"), Some(&36));
//!
//! let names: HashSet<&str> = ages.keys().copied().collect();
//! assert!(names.contains("alan"));
//! ```

mod hashmap;
mod hashset;
mod linked_hashmap;

pub use hashmap::{HashMap, HashMapIntoIterator, HashMapIterator, Keys, Values, ValuesMut};
pub use hashset::{HashSet, HashSetIterator};
pub use linked_hashmap::{KeyOrder, LinkedHashMap, LinkedHashMapConfig, LinkedHashMapIterator};

use crate::CollectionError;

/// Hash builder used when none is given.
#[cfg(not(feature = "fxhash"))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// Hash builder used when none is given.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Number of buckets a map starts with by default.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Load factor above which a map doubles its bucket table.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Sizing and resize threshold of a [`HashMap`] or [`HashSet`].
///
/// # Examples
///
/// ```rust
/// use corral::hashed::{HashMap, HashMapConfig};
///
/// let config = HashMapConfig { initial_capacity: 64, ..HashMapConfig::default() };
/// let map: HashMap<u32, u32> = HashMap::with_config(config).unwrap();
/// assert_eq!(map.capacity(), 64);
///
/// let broken = HashMapConfig { max_load_factor: 0.0, ..HashMapConfig::default() };
/// assert!(HashMap::<u32, u32>::with_config(broken).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct HashMapConfig {
    /// Number of buckets allocated up front. Zero is raised to one.
    pub initial_capacity: usize,
    /// Entries per bucket tolerated before the table doubles. Must be finite and positive.
    pub max_load_factor: f64,
}

impl HashMapConfig {
    /// Checks that the configuration can be honoured.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if `max_load_factor`
    /// is not a finite positive number.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.max_load_factor.is_finite() && self.max_load_factor > 0.0 {
            Ok(())
        } else {
            Err(CollectionError::InvalidConfiguration(format!(
                "max_load_factor must be finite and positive, got {}",
                self.max_load_factor
            )))
        }
    }
}

impl Default for HashMapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}
