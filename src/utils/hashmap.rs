//! A hash-map that behaves deterministically when the
//! `enhanced-determinism` feature is enabled.

/// Deterministic hashmap using [`indexmap::IndexMap`].
#[cfg(feature = "enhanced-determinism")]
pub type FxHashMap32<K, V> =
    indexmap::IndexMap<K, V, std::hash::BuildHasherDefault<super::fx_hasher::FxHasher32>>;
#[cfg(feature = "enhanced-determinism")]
pub use {self::FxHashMap32 as HashMap, indexmap::map::Entry};

#[cfg(not(feature = "enhanced-determinism"))]
pub use hashbrown::hash_map::Entry;
/// Hashmap using [`hashbrown::HashMap`].
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashMap<K, V> = hashbrown::HashMap<K, V, hashbrown::DefaultHashBuilder>;
