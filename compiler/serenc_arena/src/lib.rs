//! Contains the definition of [`Arena`] and [`ID`].
//!
//! [`Arena`] is an append-only store for items of type `T` referenced by a
//! typed index. Handing out typed indices instead of references keeps the
//! declaration graph free of lifetimes while still preventing ids of
//! different entity kinds from being mixed up.

use std::{
    borrow::Borrow,
    collections::{hash_map::Entry, HashMap},
    fmt::Debug,
    hash::Hash,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod arbitrary;

/// Represents a key type that can be used to index items in the [`Arena`].
pub trait Key:
    Debug + Clone + Copy + PartialEq + Eq + PartialOrd + Ord + Hash + 'static
{
    /// Creates a new [`Key`] from the given index.
    fn from_index(index: usize) -> Self;

    /// Returns the index of the [`Key`].
    fn into_index(self) -> usize;
}

/// Represents a unique identifier to a particular entry in the [`Arena`] of
/// type `T`.
pub struct ID<T: ?Sized> {
    index: usize,
    _marker: PhantomData<T>,
}

impl<T: ?Sized> ID<T> {
    /// Creates a new [`ID`] with the given index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index, _marker: PhantomData }
    }
}

impl<T: 'static + ?Sized> Key for ID<T> {
    fn from_index(index: usize) -> Self { Self::new(index) }

    fn into_index(self) -> usize { self.index }
}

impl<T: ?Sized> Debug for ID<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ty_name = std::any::type_name::<T>();
        f.debug_tuple(format!("ID<{ty_name}>").as_str())
            .field(&self.index)
            .finish()
    }
}

impl<T: ?Sized> Clone for ID<T> {
    fn clone(&self) -> Self { *self }
}

impl<T: ?Sized> Copy for ID<T> {}

impl<T: ?Sized> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool { self.index == other.index }
}

impl<T: ?Sized> Eq for ID<T> {}

impl<T: ?Sized> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T: ?Sized> Hash for ID<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T: ?Sized> Serialize for ID<T> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.index.serialize(serializer)
    }
}

impl<'de, T: ?Sized> Deserialize<'de> for ID<T> {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        usize::deserialize(deserializer).map(Self::new)
    }
}

/// Represents a collection of items of type `T` that can be referenced by an
/// [`ID`].
///
/// Internally, all the items are stored in a [`Vec`], and the [`ID`] is just
/// an index to the item in the [`Vec`]. Unlike [`Vec`], the [`Arena`] never
/// removes items, since doing so would invalidate every [`ID`] given out
/// before.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arena<T, Idx: Key = ID<T>> {
    items: Vec<T>,
    _marker: PhantomData<Idx>,
}

impl<T, Idx: Key> Default for Arena<T, Idx> {
    fn default() -> Self { Self { items: Vec::new(), _marker: PhantomData } }
}

impl<T, Idx: Key> Arena<T, Idx> {
    /// Creates a new empty [`Arena`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the number of items in the [`Arena`].
    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    /// Returns `true` if the [`Arena`] contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Inserts a new item into the [`Arena`] and returns its `Idx`.
    pub fn insert(&mut self, item: T) -> Idx {
        let index = self.items.len();
        self.items.push(item);
        Idx::from_index(index)
    }

    /// Returns a reference to the item in the [`Arena`] with the given `Idx`.
    #[must_use]
    pub fn get(&self, id: Idx) -> Option<&T> {
        self.items.get(id.into_index())
    }

    /// Returns a mutable reference to the item in the [`Arena`] with the
    /// given `Idx`.
    #[must_use]
    pub fn get_mut(&mut self, id: Idx) -> Option<&mut T> {
        self.items.get_mut(id.into_index())
    }

    /// Returns an iterator over the items in the [`Arena`] paired with their
    /// `Idx`s, in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Idx, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (Idx::from_index(index), item))
    }

    /// Returns an iterator over the `Idx`s of the items in the [`Arena`], in
    /// insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = Idx> {
        (0..self.items.len()).map(Idx::from_index)
    }
}

impl<T: Serialize, Idx: Key> Serialize for Arena<T, Idx> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, Idx: Key> Deserialize<'de> for Arena<T, Idx> {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer)
            .map(|items| Self { items, _marker: PhantomData })
    }
}

impl<T, Idx: Key> Index<Idx> for Arena<T, Idx> {
    type Output = T;

    fn index(&self, id: Idx) -> &Self::Output { self.get(id).unwrap() }
}

impl<T, Idx: Key> IndexMut<Idx> for Arena<T, Idx> {
    fn index_mut(&mut self, id: Idx) -> &mut Self::Output {
        self.get_mut(id).unwrap()
    }
}

/// Represents an [`Arena`] whose items can additionally be referenced by a
/// secondary key of type `K`.
///
/// Accessing the items by their `Idx` is more efficient than by their key,
/// since the former is a plain index while the latter goes through a hash
/// map lookup.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Index, derive_more::IndexMut,
)]
pub struct Map<T, K: Hash + Eq = String, Idx: Key = ID<T>> {
    #[index]
    #[index_mut]
    arena: Arena<T, Idx>,

    ids_by_key: HashMap<K, Idx>,
}

impl<T, K: Hash + Eq, Idx: Key> Map<T, K, Idx> {
    /// Creates a new empty [`Map`].
    #[must_use]
    pub fn new() -> Self {
        Self { arena: Arena::new(), ids_by_key: HashMap::new() }
    }

    /// Returns the number of items in the [`Map`].
    #[must_use]
    pub fn len(&self) -> usize { self.arena.len() }

    /// Returns `true` if the [`Map`] contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.arena.is_empty() }

    /// Inserts a new item into the [`Map`] with the given key.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the `Idx` of the existing item and the rejected
    /// new item if the key already exists in the [`Map`].
    pub fn insert(&mut self, key: K, item: T) -> Result<Idx, (Idx, T)> {
        match self.ids_by_key.entry(key) {
            Entry::Occupied(entry) => Err((*entry.get(), item)),
            Entry::Vacant(entry) => {
                let id = self.arena.insert(item);
                entry.insert(id);
                Ok(id)
            }
        }
    }

    /// Returns the `Idx` of the item in the [`Map`] with the given key.
    #[must_use]
    pub fn get_id<Q: ?Sized + Hash + Eq>(&self, key: &Q) -> Option<Idx>
    where
        K: Borrow<Q>,
    {
        self.ids_by_key.get(key).copied()
    }

    /// Returns a reference to the item in the [`Map`] with the given `Idx`.
    #[must_use]
    pub fn get(&self, id: Idx) -> Option<&T> { self.arena.get(id) }

    /// Returns a mutable reference to the item in the [`Map`] with the given
    /// `Idx`.
    #[must_use]
    pub fn get_mut(&mut self, id: Idx) -> Option<&mut T> {
        self.arena.get_mut(id)
    }

    /// Returns an iterator over the items in the [`Map`], in insertion
    /// order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &T> {
        self.arena.iter().map(|(_, item)| item)
    }
}

impl<T, K: Eq + Hash, Idx: Key> Default for Map<T, K, Idx> {
    fn default() -> Self { Self::new() }
}
