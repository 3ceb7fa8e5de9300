use std::iter::repeat_with;

/// Default number of buckets for a freshly created map
pub const DEFAULT_CAPACITY: usize = 16;
/// Default load factor threshold that triggers a capacity-doubling resize
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// A key/value entry stored in a bucket chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key owning this entry's slot in the chain
    key: String,
    /// The value associated with the key
    value: V,
}

/// A hash table using separate chaining for collision resolution.
///
/// Each bucket owns a chain of entries; new entries are appended at the tail
/// of their chain, so chain order is per-bucket insertion order. The bucket
/// index comes from a polynomial rolling hash that is reduced modulo the
/// *live* capacity at every step, which means bucket assignment changes when
/// the table grows and every entry is rehashed on resize.
///
/// Keys are `String`s; values are opaque to the table. Capacity only doubles,
/// never shrinks, including on `remove` and `clear`.
///
/// Note: this implementation is not thread-safe. Mutation requires `&mut
/// self`, so concurrent access is ruled out at compile time.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// The bucket array; each slot owns the chain of entries hashing to it
    buckets: Vec<Vec<Entry<V>>>,
    /// Current number of distinct keys stored across all chains
    size: usize,
    /// Threshold ratio of size to capacity before resizing (0.0 to 1.0)
    load_factor_threshold: f64,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(String, V)> for ChainedHashMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<V> ChainedHashMap<V> {
    /// Creates a new `ChainedHashMap` with the default capacity and load
    /// factor threshold (16 buckets, 0.75)
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new `ChainedHashMap` with the specified initial capacity
    /// and the default load factor threshold
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a new `ChainedHashMap` with the specified initial capacity
    /// and load factor threshold.
    ///
    /// The capacity is clamped to at least 1 bucket and the threshold into
    /// `[0.01, 1.0]`, so every argument combination yields a usable map.
    #[must_use]
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        let capacity = capacity.max(1);

        Self {
            buckets: repeat_with(Vec::new).take(capacity).collect(),
            size: 0,
            load_factor_threshold: load_factor.clamp(0.01, 1.0),
        }
    }

    /// Computes the bucket index for `key` under `capacity` buckets.
    ///
    /// Polynomial rolling hash with multiplier 31 over the key's UTF-16 code
    /// units, reduced modulo the capacity after every step: `h = (31 * h +
    /// unit) % capacity`, starting from 0. The interim modulo keeps the
    /// accumulator below the capacity, so the result is always in
    /// `[0, capacity)` and the intermediate products fit in a `u64`.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn bucket_for(key: &str, capacity: usize) -> usize {
        // The constructor guarantees at least one bucket; the max is only
        // here to keep the modulus nonzero for any caller.
        let modulus = capacity.max(1) as u64;
        let mut code: u64 = 0;
        for unit in key.encode_utf16() {
            code = (code.wrapping_mul(31).wrapping_add(u64::from(unit))) % modulus;
        }
        // code < modulus <= usize::MAX, so the cast back is lossless
        code as usize
    }

    /// Gets the bucket index for a key under the current capacity
    fn bucket_index(&self, key: &str) -> usize {
        Self::bucket_for(key, self.buckets.len())
    }

    /// Inserts a key/value pair into the hash table.
    ///
    /// If the key is already present its value is overwritten in place; an
    /// overwrite changes neither the size nor the capacity and skips the
    /// load factor check. A fresh key is appended at the tail of its chain.
    /// If that insertion pushes `size / capacity` to or past the threshold,
    /// the table doubles its capacity before returning.
    pub fn set(&mut self, key: String, value: V) {
        let index = self.bucket_index(&key);
        // The index is always in range; .get_mut avoids indexing
        let Some(chain) = self.buckets.get_mut(index) else {
            return;
        };

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            entry.value = value;
            return;
        }

        chain.push(Entry { key, value });
        self.size = self.size.saturating_add(1);

        if self.load_factor() >= self.load_factor_threshold {
            self.grow();
        }
    }

    /// Retrieves the value stored for `key`, or `None` if the key is absent.
    ///
    /// Absence is signalled through the option, never through a sentinel
    /// value, so a stored value is always distinguishable from a missing key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets.get(index)?.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Retrieves a mutable reference to the value stored for `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets
            .get_mut(index)?
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if the table contains an entry for `key`
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, returning whether one was present.
    ///
    /// The matching entry is unlinked from its chain; the order of the
    /// remaining entries is untouched. Removal never shrinks the capacity.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.bucket_index(key);
        let Some(chain) = self.buckets.get_mut(index) else {
            return false;
        };

        match chain.iter().position(|entry| entry.key == key) {
            Some(position) => {
                chain.remove(position);
                self.size = self.size.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    /// Returns the number of entries in the hash table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the hash table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Clears the hash map, discarding all entries.
    ///
    /// The bucket array is reallocated at the *current* capacity; `clear`
    /// resets the size to 0 but never the capacity.
    pub fn clear(&mut self) {
        let capacity = self.buckets.len();
        self.buckets = repeat_with(Vec::new).take(capacity).collect();
        self.size = 0;
    }

    /// Returns the number of buckets in the hash map
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the hash map
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len().max(1) as f64
    }

    /// Provide a way to configure the load factor threshold
    pub fn set_load_factor_threshold(&mut self, threshold: f64) {
        self.load_factor_threshold = threshold.clamp(0.01, 1.0);
    }

    /// Returns an iterator over the key/value pairs.
    ///
    /// Iteration visits buckets in index order and each chain in insertion
    /// order, so the overall order is *not* global insertion order and
    /// changes whenever a resize reassigns buckets.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, bucket: 0, offset: 0 }
    }

    /// Doubles the bucket array and rehashes every entry under the new
    /// capacity.
    ///
    /// Old entries are revisited in bucket order, then chain order, and each
    /// is appended at the tail of its new chain. This is an O(n) full
    /// rehash; it runs inline with the `set` call that crossed the
    /// threshold. Capacity never shrinks.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(2);
        let mut new_buckets: Vec<Vec<Entry<V>>> =
            repeat_with(Vec::new).take(new_capacity).collect();

        for chain in self.buckets.drain(..) {
            for entry in chain {
                let index = Self::bucket_for(&entry.key, new_capacity);
                if let Some(new_chain) = new_buckets.get_mut(index) {
                    new_chain.push(entry);
                }
            }
        }

        self.buckets = new_buckets;
    }
}

/// Iterator over the key/value pairs of the hash table
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Reference to the buckets of the hash map
    buckets: &'a [Vec<Entry<V>>],
    /// Index of the bucket currently being walked
    bucket: usize,
    /// Position within the current bucket's chain
    offset: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(chain) = self.buckets.get(self.bucket) {
            if let Some(entry) = chain.get(self.offset) {
                self.offset = self.offset.saturating_add(1);
                return Some((entry.key.as_str(), &entry.value));
            }
            self.bucket = self.bucket.saturating_add(1);
            self.offset = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn test_set_and_get() {
        let mut map = ChainedHashMap::new();
        map.set("key1".to_string(), 1);
        map.set("key2".to_string(), 2);
        map.set("key3".to_string(), 3);

        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.get("key3"), Some(&3));
        assert_eq!(map.get("key4"), None);
    }

    #[test]
    fn test_overwrite_keeps_len() {
        let mut map = ChainedHashMap::new();
        map.set("key1".to_string(), 1);
        map.set("key1".to_string(), 10);

        assert_eq!(map.get("key1"), Some(&10));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_overwrite_skips_growth_check() {
        let mut map = ChainedHashMap::with_capacity_and_load_factor(2, 0.75);
        map.set("key1".to_string(), 0);
        assert_eq!(map.capacity(), 2);

        // Overwrites never change size, so they must never trigger a resize
        for round in 0..10 {
            map.set("key1".to_string(), round);
        }

        assert_eq!(map.capacity(), 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key1"), Some(&9));
    }

    #[test]
    fn test_has() {
        let mut map = ChainedHashMap::new();
        map.set("key1".to_string(), 1);

        assert!(map.has("key1"));
        assert!(!map.has("key2"));
    }

    #[test]
    fn test_remove() {
        let mut map = ChainedHashMap::new();
        map.set("key1".to_string(), 1);
        map.set("key2".to_string(), 2);

        assert!(map.remove("key1"));
        assert_eq!(map.get("key1"), None);
        assert_eq!(map.get("key2"), Some(&2));
        assert!(!map.remove("key1"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_absent_leaves_state_untouched() {
        let mut map = ChainedHashMap::new();
        map.set("key1".to_string(), 1);
        let capacity = map.capacity();

        assert!(!map.remove("missing"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.capacity(), capacity);
        assert_eq!(map.get("key1"), Some(&1));
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut map = ChainedHashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);

        map.set("key1".to_string(), 1);
        assert!(!map.is_empty());
        assert_eq!(map.len(), 1);

        map.set("key2".to_string(), 2);
        assert_eq!(map.len(), 2);

        map.remove("key1");
        assert_eq!(map.len(), 1);

        map.remove("key2");
        assert!(map.is_empty());
    }

    #[test]
    fn test_get_mut() {
        let mut map = ChainedHashMap::new();
        map.set("key1".to_string(), 1);

        if let Some(value) = map.get_mut("key1") {
            *value += 10;
        }

        assert_eq!(map.get("key1"), Some(&11));
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut map = ChainedHashMap::with_capacity(2);
        for index in 0..8 {
            map.set(index.to_string(), index);
        }
        let grown = map.capacity();
        assert!(grown > 2);

        map.clear();

        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.capacity(), grown);
        assert_eq!(map.get("0"), None);
    }

    #[test]
    fn test_bucket_pinning() {
        // Exact bucket assignment for the 31-polynomial hash with interim
        // modulo, checked by hand for capacity 16
        assert_eq!(ChainedHashMap::<u32>::bucket_for("name", 16), 11);
        assert_eq!(ChainedHashMap::<u32>::bucket_for("city", 16), 11);
        assert_eq!(ChainedHashMap::<u32>::bucket_for("age", 16), 15);
        assert_eq!(ChainedHashMap::<u32>::bucket_for("", 16), 0);
        assert_eq!(ChainedHashMap::<u32>::bucket_for("a", 2), 1);
        assert_eq!(ChainedHashMap::<u32>::bucket_for("b", 2), 0);
    }

    #[test]
    fn test_iteration_order_is_bucket_then_chain() {
        // "name" and "city" collide in bucket 11 at capacity 16, "age" lands
        // in bucket 15, so the walk yields name, city, age regardless of the
        // order age was inserted in
        let mut map = ChainedHashMap::new();
        map.set("name".to_string(), 1);
        map.set("age".to_string(), 2);
        map.set("city".to_string(), 3);

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["name", "city", "age"]);
    }

    #[test]
    fn test_growth_trace() {
        let mut map = ChainedHashMap::with_capacity_and_load_factor(2, 0.75);

        map.set("a".to_string(), 1);
        assert_eq!(map.capacity(), 2); // 1/2 = 0.5 < 0.75

        map.set("b".to_string(), 2);
        assert_eq!(map.capacity(), 4); // 2/2 = 1.0 >= 0.75

        map.set("c".to_string(), 3);
        assert_eq!(map.capacity(), 8); // 3/4 = 0.75 >= 0.75

        map.set("d".to_string(), 4);
        assert_eq!(map.capacity(), 8); // 4/8 = 0.5 < 0.75
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_resize_preserves_entries() {
        let mut map = ChainedHashMap::with_capacity(2);
        let mut before: Vec<(String, usize)> = Vec::new();

        for index in 0..50 {
            map.set(format!("key-{index}"), index);
            before.push((format!("key-{index}"), index));
        }

        assert_eq!(map.len(), 50);
        assert!(map.capacity() >= 64);

        let mut after: Vec<(String, usize)> =
            map.iter().map(|(key, value)| (key.to_string(), *value)).collect();
        after.sort();
        before.sort();
        assert_eq!(after, before);
    }

    proptest! {
        #[test]
        fn behaves_like_std_hashmap(
            ops in prop::collection::vec(("[a-z]{1,3}", any::<u32>(), any::<bool>()), 0..200),
        ) {
            let mut map = ChainedHashMap::with_capacity(2);
            let mut model: HashMap<String, u32> = HashMap::new();

            for (key, value, removal) in ops {
                if removal {
                    prop_assert_eq!(map.remove(&key), model.remove(&key).is_some());
                } else {
                    map.set(key.clone(), value);
                    model.insert(key, value);
                }
                prop_assert_eq!(map.len(), model.len());
            }

            for (key, value) in &model {
                prop_assert_eq!(map.get(key), Some(value));
                prop_assert!(map.has(key));
            }

            let mut observed: Vec<(String, u32)> =
                map.iter().map(|(key, value)| (key.to_string(), *value)).collect();
            observed.sort();
            let mut expected: Vec<(String, u32)> = model.into_iter().collect();
            expected.sort();
            prop_assert_eq!(observed, expected);
        }
    }
}
