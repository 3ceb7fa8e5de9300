//! # Chained Hash Map
//!
//! A Rust implementation of a hash table using separate chaining.
//!
//! This crate provides [`ChainedHashMap`], a deliberately small associative
//! array for `String` keys: each bucket owns a chain of entries, collisions
//! are resolved by appending to the chain's tail, and the table doubles its
//! capacity whenever the load factor reaches its threshold (0.75 by
//! default). The bucket index comes from a polynomial rolling hash with
//! multiplier 31 that is reduced modulo the live capacity at every step, so
//! every entry is rehashed when the table grows.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.set("apple".to_string(), 1);
//! map.set("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//! assert!(map.has("banana"));
//!
//! // Update values in place
//! map.set("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//! assert_eq!(map.len(), 2);
//!
//! // Remove values
//! assert!(map.remove("apple"));
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Enumeration
//!
//! Enumeration walks buckets in index order and each chain in insertion
//! order; the overall order is capacity-dependent, not insertion order.
//!
//! ```rust
//! use chainmap::{ChainedHashMap, HashMapExtensions};
//!
//! let mut map = ChainedHashMap::new();
//! map.set("name".to_string(), "John".to_string());
//! map.set("age".to_string(), "30".to_string());
//!
//! let mut keys = map.keys();
//! keys.sort();
//! assert_eq!(keys, vec!["age".to_string(), "name".to_string()]);
//! assert_eq!(map.entries().len(), 2);
//! ```

/// Module implementing the separate-chaining hash map
mod chained_hashmap;
/// Utility functions and traits for the hash map
mod utils;

pub use chained_hashmap::{ChainedHashMap, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, Iter};
pub use utils::HashMapExtensions;
