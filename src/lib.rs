//! # corral
//!
//! Generic collections for Rust: growable ring-buffer deques, a chained hash
//! map with a configurable load factor, an insertion- or access-ordered linked
//! hash map, a binary heap, a bit set, and directed/undirected labeled graphs.
//!
//! ## Overview
//!
//! - **Linear**: `ArrayDeque`, `ArrayQueue`, `ArrayStack`, `ArrayList`, `LinkedList`
//! - **Hashed**: `HashMap`, `HashSet`, `LinkedHashMap`
//! - **Graph**: `LabeledGraph`, `Graph`
//! - **Bitset**: `BitSet`
//! - **Heap**: `BinaryHeap` with pluggable comparators
//!
//! Every collection takes an explicit configuration record with documented
//! defaults. Removing from an empty collection returns
//! [`CollectionError::EmptyCollection`]; a missing key is `None`.
//!
//! ## Feature Flags
//!
//! - `linear`: Ring-buffer and vector-backed sequences
//! - `hashed`: Hash map, hash set, linked hash map
//! - `graph`: Labeled and unlabeled graphs (enables `hashed`)
//! - `bitset`: Fixed-length bit set
//! - `heap`: Binary heap
//! - `serde`: `Serialize`/`Deserialize` for collections and configuration records
//! - `fxhash`: Use `rustc_hash::FxBuildHasher` as the default hash builder
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let mut deque: ArrayDeque<i32> = (1..=10).collect();
//! for _ in 0..5 {
//!     let front = deque.remove_front().unwrap();
//!     deque.add_back(front);
//! }
//! assert_eq!(deque.to_vec(), vec![6, 7, 8, 9, 10, 1, 2, 3, 4, 5]);
//!
//! let mut graph = LabeledGraph::directed();
//! graph.add_edge("a", "b", 1.5);
//! assert_eq!(graph.label(&"a", &"b"), Some(&1.5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the error type, the sequence contracts and every enabled
/// collection. [`Map`](crate::traits::Map) is left out: its `&self` lookup
/// would shadow the promoting `LinkedHashMap::get`.
///
/// # Usage
///
/// ```rust
/// use corral::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CollectionError;
    pub use crate::traits::{Collection, Deque, Queue, Stack};

    #[cfg(feature = "linear")]
    pub use crate::linear::*;

    #[cfg(feature = "hashed")]
    pub use crate::hashed::*;

    #[cfg(feature = "graph")]
    pub use crate::graph::*;

    #[cfg(feature = "bitset")]
    pub use crate::bitset::*;

    #[cfg(feature = "heap")]
    pub use crate::heap::{BinaryHeap, Comparator, HeapConfig, NaturalOrder, Reversed};
}

pub mod error;
pub mod traits;

pub use error::CollectionError;

#[cfg(any(feature = "linear", feature = "hashed"))]
mod arena;

#[cfg(feature = "linear")]
pub mod linear;

#[cfg(feature = "hashed")]
pub mod hashed;

#[cfg(feature = "graph")]
pub mod graph;

#[cfg(feature = "bitset")]
pub mod bitset;

#[cfg(feature = "heap")]
pub mod heap;

#[cfg(feature = "linear")]
static_assertions::assert_impl_all!(linear::ArrayDeque<String>: Send, Sync, Clone, Default);

#[cfg(feature = "linear")]
static_assertions::assert_impl_all!(linear::LinkedList<String>: Send, Sync, Clone);

#[cfg(feature = "hashed")]
static_assertions::assert_impl_all!(hashed::HashMap<String, Vec<u8>>: Send, Sync, Clone, Default);

#[cfg(feature = "graph")]
static_assertions::assert_impl_all!(graph::LabeledGraph<u32, String>: Send, Sync, Clone);

#[cfg(feature = "linear")]
static_assertions::assert_not_impl_any!(linear::ArrayDeque<std::rc::Rc<u8>>: Send, Sync);

static_assertions::assert_impl_all!(CollectionError: std::error::Error, Send, Sync, Clone);
