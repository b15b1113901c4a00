//! Insertion-ordered map.
//!
//! This module provides [`OrderedMap`], a hash-indexed map that iterates,
//! exports and serializes its entries in the order their keys were first
//! inserted.
//!
//! # Core Types
//!
//! - [`OrderedMap`] - The container: a key index plus an insertion-order list
//! - [`Iter`], [`Keys`], [`Values`], [`IntoIter`] - Iterators in insertion order
//!
//! # Structure
//!
//! The map keeps two structures that always agree with each other:
//! - an index from each key to a stable slot handle, and
//! - an arena of slots linked into a doubly-linked list by handle.
//!
//! Lookups go through the index; iteration walks the list from head to tail.
//! Deleting unlinks one slot without touching any other entry.
//!
//! # First Write Wins
//!
//! [`OrderedMap::set`] never overwrites. Setting a key that is already present
//! is a no-op and keeps the original value *and* the original position. This
//! differs from `HashMap::insert` and is easy to trip over; use
//! [`OrderedMap::get_mut`] to change a stored value in place, or
//! [`OrderedMap::delete`] followed by `set` to move a key to the end.
//!
//! ```
//! use ordmap::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.set("b", 1);
//! map.set("a", 2);
//! map.set("b", 3); // ignored
//!
//! assert_eq!(map.get("b"), Some(&1));
//! assert_eq!(map.entries(), vec![("b", 1), ("a", 2)]);
//! ```
//!
//! # Concurrency
//!
//! The map is not internally synchronized. It is `Send`/`Sync` whenever its
//! keys and values are, but callers that mutate it from several threads must
//! serialize `set`/`get`/`delete`/`reset`/`entries` themselves, e.g. by
//! wrapping it in a `Mutex` or `RwLock`.

mod iter;
mod order;
mod serde_impl;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

pub use iter::{IntoIter, Iter, Keys, Values};

use order::{Handle, OrderList};

/// A map that remembers the order in which keys were first inserted.
///
/// See the [module documentation](self) for the first-write-wins policy.
///
/// # Examples
///
/// ```
/// use ordmap::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("name".to_string(), "Alice");
/// map.set("role".to_string(), "admin");
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("name"), Some(&"Alice"));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["name", "role"]);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    index: HashMap<K, Handle>,
    order: OrderList<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Create a new empty `OrderedMap`.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            order: OrderList::new(),
        }
    }

    /// Create an empty `OrderedMap` with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            order: OrderList::with_capacity(capacity),
        }
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard every entry.
    ///
    /// Both internal structures are replaced by fresh empty ones rather than
    /// drained, so this does not walk the old entries.
    pub fn reset(&mut self) {
        self.index = HashMap::new();
        self.order.clear();
    }

    /// Iterate over `(&K, &V)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.order)
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Get a value by key.
    ///
    /// Lookups never change the order.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        self.order.node(handle).map(|node| &node.value)
    }

    /// Get a mutable reference to a value by key.
    ///
    /// This is the way to change a stored value, since [`set`](Self::set)
    /// keeps the first one.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        self.order.node_mut(handle).map(|node| &mut node.value)
    }

    /// Check if a key is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Remove a key and return its value.
    ///
    /// Deleting an absent key is a no-op. A deleted key that is set again
    /// goes to the end of the order.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.remove(key)?;
        self.order.unlink(handle).map(|(_, value)| value)
    }

    /// Copy the map into a `HashMap`, dropping the order.
    pub fn as_unordered(&self) -> HashMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Snapshot of every `(key, value)` pair, head to tail.
    ///
    /// Each call builds a new vector from the current state.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Append a key-value pair unless the key is already present.
    ///
    /// Returns `true` if the entry was added. When the key exists this does
    /// nothing and returns `false`: the stored value is **not** replaced and
    /// the key keeps its position.
    pub fn set(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let handle = self.order.push_back(key.clone(), value);
        self.index.insert(key, handle);
        true
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same entries in the same order.
impl<K, V> PartialEq for OrderedMap<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, Q> Index<&Q> for OrderedMap<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in OrderedMap"),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.order)
    }
}
