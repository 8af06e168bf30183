use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::slice;

use crate::error::{CollectionError, Result};
use crate::groups::Groups;
use crate::storage::{IntoIter, Storage};

/// Inline capacity used when `N` is not spelled out.
pub const DEFAULT_INLINE_CAPACITY: usize = 8;

/// An ordered, growable collection with LINQ-style query operations.
///
/// # Behavior
/// * **Order:** Insertion order is kept by every operation except [`sort`](Self::sort),
///   [`reverse_sort`](Self::reverse_sort) and [`reverse`](Self::reverse).
/// * **Stack Storage:** The first `N` elements live inline in a `heapless::Vec`.
/// * **Heap Spill:** Pushing element `N + 1` moves everything to a `std::vec::Vec`.
///   Results never depend on which storage is active.
/// * **Mutation vs Transformation:** mutating operations (`add`, `remove_*`, `sort`,
///   `reverse`) change the receiver in place; transforming
///   operations (`select`, `where_`, `group_by`) leave the receiver alone and return
///   new, independently owned values.
/// * **Read Access:** Implements `Deref<Target = [T]>`, so indexing and slice methods
///   (`iter`, `first`, `windows`, ...) work directly. There is no `DerefMut`: all
///   mutation goes through the methods above.
///
/// "Not found" is always `None`. Only positional removals can fail, and they
/// report a [`CollectionError`] without touching the sequence.
pub struct Collection<T, const N: usize = DEFAULT_INLINE_CAPACITY> {
    items: Storage<T, N>,
}

impl<T, const N: usize> Collection<T, N> {
    /// The maximum allowed inline footprint in bytes (16 KB).
    pub const MAX_STACK_SIZE: usize = 16 * 1024;

    /// Creates a new, empty collection on the stack.
    ///
    /// # Compile-Time Safety Check
    /// The build fails if `Collection<T, N>` is larger than
    /// [`MAX_STACK_SIZE`](Self::MAX_STACK_SIZE). Reduce `N` or box `T` to fix it.
    pub fn new() -> Self {
        const {
            assert!(
                std::mem::size_of::<Self>() <= Collection::<T, N>::MAX_STACK_SIZE,
                "Collection is too large! Reduce N or box the element type."
            );
        }
        Self {
            items: Storage::new(),
        }
    }

    /// Creates a collection that goes straight to the heap if `capacity > N`.
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity <= N {
            Self::new()
        } else {
            Self {
                items: Storage::with_capacity(capacity),
            }
        }
    }

    /// Creates a collection holding exactly `items`, in order.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::new();
        collection.add_range(items);
        collection
    }

    // --- Inspection ---

    #[inline]
    pub fn is_on_stack(&self) -> bool {
        self.items.is_inline()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    // --- Modification ---

    /// Appends an element at the tail. Amortized O(1).
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends every element of `items` at the tail, keeping their relative order.
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = items.into_iter();
        let (lower, _) = iter.size_hint();
        self.items.reserve(lower);
        for item in iter {
            self.items.push(item);
        }
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Errors
    /// [`CollectionError::IndexOutOfRange`] if `index >= count()`. The collection
    /// is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.count();
        if index >= len {
            log::debug!("remove_at rejected: index {index} out of range for length {len}");
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Removes `count` contiguous elements starting at `start`.
    ///
    /// # Errors
    /// [`CollectionError::RangeOutOfBounds`] unless `start + count <= count()`.
    /// The collection is left unchanged.
    pub fn remove_range(&mut self, start: usize, count: usize) -> Result<()> {
        let len = self.count();
        match start.checked_add(count) {
            Some(end) if end <= len => {
                self.items.remove_range(start, count);
                Ok(())
            }
            _ => {
                log::debug!(
                    "remove_range rejected: start {start} count {count} out of bounds for length {len}"
                );
                Err(CollectionError::RangeOutOfBounds { start, count, len })
            }
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    // --- Lookup ---

    /// Returns the element at `index`, or `None` when `index` is out of range.
    ///
    /// Never panics.
    #[inline]
    pub fn find_by_index(&self, index: usize) -> Option<&T> {
        self.items.as_slice().get(index)
    }

    /// Returns the first element matching `predicate`, scanning in order and
    /// stopping at the first hit.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(*item))
    }

    /// Returns every element matching `predicate`, in source order.
    ///
    /// An empty vector means nothing matched. See [`where_`](Self::where_) for a
    /// version that returns an owned `Collection`.
    pub fn find_many<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(*item)).collect()
    }

    // --- Transformation ---

    /// Maps every element through `selector` into a new collection of the same length.
    pub fn select<U, F>(&self, selector: F) -> Collection<U, N>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(selector).collect()
    }

    // --- Aggregation ---

    /// Sums `selector` over all elements. `0.0` for an empty collection.
    pub fn sum<F>(&self, mut selector: F) -> f64
    where
        F: FnMut(&T) -> f64,
    {
        self.iter().fold(0.0, |total, item| total + selector(item))
    }

    /// Largest `selector` value, or `0.0` for an empty collection.
    ///
    /// Use [`checked_max`](Self::checked_max) when `0.0` could be mistaken for a
    /// real result.
    pub fn max<F>(&self, selector: F) -> f64
    where
        F: FnMut(&T) -> f64,
    {
        self.checked_max(selector).unwrap_or(0.0)
    }

    /// Smallest `selector` value, or `0.0` for an empty collection.
    pub fn min<F>(&self, selector: F) -> f64
    where
        F: FnMut(&T) -> f64,
    {
        self.checked_min(selector).unwrap_or(0.0)
    }

    /// Largest `selector` value, or `None` for an empty collection.
    pub fn checked_max<F>(&self, selector: F) -> Option<f64>
    where
        F: FnMut(&T) -> f64,
    {
        self.extreme(selector, |current, best| current > best)
    }

    /// Smallest `selector` value, or `None` for an empty collection.
    pub fn checked_min<F>(&self, selector: F) -> Option<f64>
    where
        F: FnMut(&T) -> f64,
    {
        self.extreme(selector, |current, best| current < best)
    }

    // --- Ordering ---

    /// Sorts in place. `less(a, b)` returns `true` when `a` must come before `b`.
    ///
    /// Not stable. `less` must be a strict weak ordering; otherwise the resulting
    /// order is unspecified and the sort may panic.
    pub fn sort<F>(&mut self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.items
            .as_mut_slice()
            .sort_unstable_by(|a, b| ordering_from_less(&mut less, a, b));
    }

    /// Sorts in place into the descending arrangement of `less`.
    ///
    /// Stable: elements that `less` considers equal keep their original
    /// relative order.
    pub fn reverse_sort<F>(&mut self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.items
            .as_mut_slice()
            .sort_by(|a, b| ordering_from_less(&mut less, b, a));
    }

    /// Stable ascending sort on a derived key.
    pub fn sort_by_key<K, F>(&mut self, key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items.as_mut_slice().sort_by_key(key);
    }

    /// Reverses the order of all elements in place.
    pub fn reverse(&mut self) {
        self.items.as_mut_slice().reverse();
    }

    // --- Snapshot ---

    /// Read-only view of the whole sequence.
    ///
    /// The view borrows the collection, so it cannot be held across a mutation.
    #[inline]
    pub fn get_all(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Consumes the collection and returns a standard `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }

    // --- Internal Helpers ---

    fn extreme<F, B>(&self, mut selector: F, mut better: B) -> Option<f64>
    where
        F: FnMut(&T) -> f64,
        B: FnMut(f64, f64) -> bool,
    {
        let mut iter = self.iter();
        let first = selector(iter.next()?);
        Some(iter.fold(first, |best, item| {
            let current = selector(item);
            if better(current, best) { current } else { best }
        }))
    }
}

/// Turns a strict "a precedes b" predicate into a total `Ordering`.
fn ordering_from_less<T, F>(less: &mut F, a: &T, b: &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

// --- Equality-Based Operations ---

impl<T: PartialEq, const N: usize> Collection<T, N> {
    /// Removes the first element equal to `item`. Returns whether one was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.as_slice().contains(item)
    }

    /// Position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }
}

// --- Cloning Transformations ---

impl<T: Clone, const N: usize> Collection<T, N> {
    /// Returns a new collection with the elements matching `predicate`, in source order.
    ///
    /// Named with a trailing underscore because `where` is a keyword.
    pub fn where_<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(*item)).cloned().collect()
    }

    /// Splits the elements into groups keyed by `key_selector`.
    ///
    /// Every element lands in exactly one group; each group keeps source order.
    /// Key iteration order of the returned [`Groups`] is unspecified.
    pub fn group_by<K, F>(&self, mut key_selector: F) -> Groups<K, T, N>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups = Groups::new();
        for item in self.iter() {
            groups.push(key_selector(item), item.clone());
        }
        groups
    }
}

// --- Trait Implementations ---

impl<T, const N: usize> Deref for Collection<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.items.as_slice()
    }
}

impl<T, const N: usize> Default for Collection<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for Collection<T, N> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Collection<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.get_all(), f)
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Collection<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.get_all() == other.get_all()
    }
}
impl<T: Eq, const N: usize> Eq for Collection<T, N> {}

impl<T: Hash, const N: usize> Hash for Collection<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get_all().hash(state);
    }
}

impl<T, const N: usize> AsRef<[T]> for Collection<T, N> {
    fn as_ref(&self) -> &[T] {
        self.get_all()
    }
}

impl<T, const N: usize> Extend<T> for Collection<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T, const N: usize> FromIterator<T> for Collection<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T, const N: usize> From<Vec<T>> for Collection<T, N> {
    /// Takes over the allocation when `vec` does not fit inline.
    fn from(vec: Vec<T>) -> Self {
        if vec.len() > N {
            Self {
                items: Storage::Spilled(vec),
            }
        } else {
            Self::from_items(vec)
        }
    }
}

impl<T, const N: usize, const M: usize> From<[T; M]> for Collection<T, N> {
    fn from(array: [T; M]) -> Self {
        Self::from_items(array)
    }
}

impl<T, const N: usize> IntoIterator for Collection<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Collection<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.get_all().iter()
    }
}

/// Builds a [`Collection`] with the default inline capacity from a list of elements.
///
/// ```rust
/// use generic_collections::collection;
///
/// let numbers = collection![1, 2, 3];
/// assert_eq!(numbers.count(), 3);
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::<_>::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Collection::<_>::from_items([$($item),+])
    };
}

// --- Test Suite ---
