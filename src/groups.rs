use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::ops::Index;

// FNV for the same fast small-key hashing the inline storage side favours
use fnv::FnvBuildHasher;
use hashbrown::HashMap;
use hashbrown::hash_map;

use crate::collection::{Collection, DEFAULT_INLINE_CAPACITY};

/// The result of [`Collection::group_by`]: one [`Collection`] per distinct key.
///
/// * **Key order:** unspecified. Do not rely on iteration order across keys.
/// * **Member order:** each group keeps its members in source order.
/// * **Ownership:** groups hold clones of the source elements and share nothing
///   with the collection they came from.
pub struct Groups<K, T, const N: usize = DEFAULT_INLINE_CAPACITY> {
    map: HashMap<K, Collection<T, N>, FnvBuildHasher>,
}

impl<K, T, const N: usize> Groups<K, T, N>
where
    K: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            map: HashMap::default(),
        }
    }

    /// Appends `item` to the group for `key`, creating the group on first use.
    pub(crate) fn push(&mut self, key: K, item: T) {
        self.map.entry(key).or_default().add(item);
    }

    /// Returns the number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the total number of elements across all groups.
    pub fn total_count(&self) -> usize {
        self.map.values().map(Collection::count).sum()
    }

    /// Returns the group for `key`, if any source element mapped to it.
    pub fn get<Q>(&self, key: &Q) -> Option<&Collection<T, N>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, Collection<T, N>> {
        self.map.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, K, Collection<T, N>> {
        self.map.values()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, Collection<T, N>> {
        self.map.iter()
    }

    /// Removes and returns the group for `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Collection<T, N>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(key)
    }
}

impl<K, T, Q, const N: usize> Index<&Q> for Groups<K, T, N>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    type Output = Collection<T, N>;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("no group found for key")
    }
}

impl<K: Debug, T: Debug, const N: usize> Debug for Groups<K, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: Clone, T: Clone, const N: usize> Clone for Groups<K, T, N> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<K, T, const N: usize> PartialEq for Groups<K, T, N>
where
    K: Eq + Hash,
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, T, const N: usize> IntoIterator for Groups<K, T, N> {
    type Item = (K, Collection<T, N>);
    type IntoIter = hash_map::IntoIter<K, Collection<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, T, const N: usize> IntoIterator for &'a Groups<K, T, N> {
    type Item = (&'a K, &'a Collection<T, N>);
    type IntoIter = hash_map::Iter<'a, K, Collection<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
