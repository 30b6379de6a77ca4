#![cfg(feature = "hashed")]
//! Property-based tests for HashMap.
//!
//! Every sequence of puts and removes is replayed against
//! `std::collections::HashMap`; both maps must agree on every lookup, on
//! their length, and on the returned previous values. The same laws run for
//! integer, float, string and composite keys.

use std::collections::HashMap as StdHashMap;
use std::hash::Hash;

use corral::hashed::{HashMap, HashMapConfig};
use proptest::prelude::*;

// =============================================================================
// Key types
// =============================================================================

/// An `f64` compared and hashed by its bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FloatKey(u64);

impl From<f64> for FloatKey {
    fn from(value: f64) -> Self {
        Self(value.to_bits())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PointKey {
    x: i16,
    y: i16,
    tag: String,
}

#[derive(Debug, Clone)]
enum Operation<K> {
    Put(K, i64),
    Remove(K),
}

// =============================================================================
// Strategies
// =============================================================================

fn int_key() -> impl Strategy<Value = i32> + Clone {
    -64..64i32
}

fn float_key() -> impl Strategy<Value = FloatKey> + Clone {
    prop_oneof![
        (-32..32i32).prop_map(|value| FloatKey::from(f64::from(value) / 4.0)),
        Just(FloatKey::from(f64::NAN)),
        Just(FloatKey::from(-0.0)),
    ]
}

fn string_key() -> impl Strategy<Value = String> + Clone {
    "[a-e]{0,3}"
}

fn point_key() -> impl Strategy<Value = PointKey> + Clone {
    (-4..4i16, -4..4i16, "[xy]{0,1}").prop_map(|(x, y, tag)| PointKey { x, y, tag })
}

fn operations<K, S>(key: S) -> impl Strategy<Value = Vec<Operation<K>>>
where
    K: Clone + std::fmt::Debug,
    S: Strategy<Value = K> + Clone,
{
    prop::collection::vec(
        prop_oneof![
            3 => (key.clone(), any::<i64>()).prop_map(|(key, value)| Operation::Put(key, value)),
            1 => key.prop_map(Operation::Remove),
        ],
        0..200,
    )
}

fn small_config() -> impl Strategy<Value = HashMapConfig> {
    (
        0..8usize,
        prop_oneof![Just(0.5), Just(0.75), Just(1.0), Just(3.0), 0.01f64..4.0],
    )
        .prop_map(
            |(initial_capacity, max_load_factor)| HashMapConfig {
                initial_capacity,
                max_load_factor,
            },
        )
}

// =============================================================================
// Model check
// =============================================================================

fn agrees_with_std<K>(
    config: HashMapConfig,
    operations: Vec<Operation<K>>,
) -> Result<(), TestCaseError>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
{
    let mut map =
        HashMap::with_config(config).map_err(|error| TestCaseError::fail(error.to_string()))?;
    let mut model = StdHashMap::new();

    for operation in operations {
        match operation {
            Operation::Put(key, value) => {
                prop_assert_eq!(map.put(key.clone(), value), model.insert(key, value));
            }
            Operation::Remove(key) => {
                prop_assert_eq!(map.remove(&key), model.remove(&key));
            }
        }
        prop_assert_eq!(map.len(), model.len());
        prop_assert!(map.load_factor() <= map.max_load_factor());
    }

    for (key, value) in &model {
        prop_assert_eq!(map.get(key), Some(value));
    }
    prop_assert_eq!(map.iter().count(), model.len());
    Ok(())
}

macro_rules! hashmap_laws {
    ($($name:ident => $key:expr),* $(,)?) => {
        paste::paste! {
            proptest! {
                $(
                    #[test]
                    fn [<prop_ $name _keys_agree_with_std>](
                        config in small_config(),
                        ops in operations($key),
                    ) {
                        agrees_with_std(config, ops)?;
                    }

                    #[test]
                    fn [<prop_ $name _put_then_get>](
                        ops in operations($key),
                        value in any::<i64>(),
                    ) {
                        let mut map = HashMap::new();
                        let mut last_key = None;
                        for operation in ops {
                            if let Operation::Put(key, _) = operation {
                                map.put(key.clone(), value);
                                last_key = Some(key);
                            }
                        }
                        if let Some(key) = last_key {
                            prop_assert_eq!(map.get(&key), Some(&value));
                        }
                    }
                )*
            }
        }
    };
}

proptest! {
    #[test]
    fn prop_load_factor_stays_within_any_limit(
        initial_capacity in 0..16usize,
        max_load_factor in 0.01f64..4.0,
        keys in prop::collection::vec(any::<u16>(), 0..150),
    ) {
        let config = HashMapConfig { initial_capacity, max_load_factor };
        let mut map = HashMap::with_config(config)
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        for key in keys {
            map.put(key, ());
            prop_assert!(
                map.load_factor() <= max_load_factor,
                "{} entries in {} buckets exceed {}",
                map.len(),
                map.capacity(),
                max_load_factor
            );
        }
    }
}

hashmap_laws! {
    int => int_key(),
    float => float_key(),
    string => string_key(),
    point => point_key(),
}
