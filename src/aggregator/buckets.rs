//! Insertion-ordered salary buckets.
//!
//! A bucket maps a key (year or city) to every representative salary
//! counted under it. Keys iterate in the order they were first seen.

use std::collections::HashMap;
use std::hash::Hash;

/// Ordered mapping from key to the salaries collected for it
#[derive(Debug, Clone)]
pub struct Buckets<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, Vec<f64>)>,
}

// `index` is derived from `entries`
impl<K: PartialEq> PartialEq for Buckets<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K> Default for Buckets<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Buckets<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the bucket for `key`, creating it on first sight
    pub fn push(&mut self, key: K, value: f64) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1.push(value),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&[f64]> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of values collected for `key` (0 if absent)
    pub fn count(&self, key: &K) -> usize {
        self.get(key).map_or(0, <[f64]>::len)
    }
}

impl<K> Buckets<K> {
    /// (key, values) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[f64])> {
        self.entries
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
