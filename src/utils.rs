//! Utility functions and traits for `ChainedHashMap`

use crate::ChainedHashMap;

/// Extension trait providing materialized snapshot views of a hash map.
///
/// Each method walks the whole table in bucket-index order, then chain order
/// within each bucket, and collects into a fresh `Vec`. The snapshots are
/// detached from the map; later mutation does not affect them. The ordering
/// is capacity-dependent and changes across resizes.
pub trait HashMapExtensions<V> {
    /// Returns the keys of the hash map as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the hash map as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns the key/value pairs of the hash map as a Vec
    fn entries(&self) -> Vec<(String, V)>;
}

impl<V> HashMapExtensions<V> for ChainedHashMap<V>
where
    V: Clone,
{
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_string()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn entries(&self) -> Vec<(String, V)> {
        self.iter().map(|(key, value)| (key.to_string(), value.clone())).collect()
    }
}

/// Creates a `ChainedHashMap` from an iterator of key-value pairs
#[allow(dead_code)]
pub fn from_iter<V, I>(iter: I) -> ChainedHashMap<V>
where
    I: IntoIterator<Item = (String, V)>,
{
    let mut map = ChainedHashMap::new();

    for (key, value) in iter {
        map.set(key, value);
    }

    map
}
