//! Contains the definition of [`UniqueMap`].

use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
};

/// The error returned by [`UniqueMap::insert_unique`] when a key is written
/// a second time with a different value.
///
/// Carrying both values makes the conflicting assignment visible at the
/// fault site instead of silently overwriting one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[error("the key is already mapped to {existing:?}, rejecting {new:?}")]
pub struct Conflict<V: std::fmt::Debug> {
    /// The value the key was first mapped to.
    pub existing: V,

    /// The rejected new value.
    pub new: V,
}

/// A map whose entries are written once: re-inserting the value a key
/// already holds is a silent no-op, inserting a different one is a
/// [`Conflict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueMap<K: Eq + Hash, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> Default for UniqueMap<K, V> {
    fn default() -> Self { Self { entries: HashMap::new() } }
}

impl<K: Eq + Hash, V: Copy + Eq + std::fmt::Debug> UniqueMap<K, V> {
    /// Creates a new empty [`UniqueMap`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Inserts the value under the key unless the key already holds a
    /// different one.
    ///
    /// # Errors
    ///
    /// See [`Conflict`].
    pub fn insert_unique(&mut self, key: K, value: V) -> Result<(), Conflict<V>> {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                let existing = *entry.get();

                if existing == value {
                    Ok(())
                } else {
                    Err(Conflict { existing, new: value })
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Returns the value the key is mapped to.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> { self.entries.get(key) }

    /// Checks if the key has been written.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
