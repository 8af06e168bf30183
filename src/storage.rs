//! Backing store for [`Collection`](crate::Collection).
//!
//! Elements live inline in a `heapless::Vec<T, N>` until the `N + 1`-th element
//! arrives, at which point everything is moved into a `std::vec::Vec<T>`.
//! The move is one-way: a spilled store never returns to inline storage.

use std::mem;

/// Inline-then-heap storage.
///
/// The variant is the tag: `Inline` holds at most `N` elements with zero
/// allocations, `Spilled` behaves like a plain `Vec`.
#[derive(Clone, Debug)]
pub(crate) enum Storage<T, const N: usize> {
    Inline(heapless::Vec<T, N>),
    Spilled(Vec<T>),
}

impl<T, const N: usize> Storage<T, N> {
    pub(crate) const fn new() -> Self {
        Storage::Inline(heapless::Vec::new())
    }

    /// Goes straight to the heap when `capacity` cannot fit inline.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        if capacity <= N {
            Self::new()
        } else {
            Storage::Spilled(Vec::with_capacity(capacity))
        }
    }

    // --- Inspection ---

    #[inline]
    pub(crate) fn is_inline(&self) -> bool {
        matches!(self, Storage::Inline(_))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Storage::Inline(vec) => vec.len(),
            Storage::Spilled(vec) => vec.len(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        match self {
            Storage::Inline(_) => N,
            Storage::Spilled(vec) => vec.capacity(),
        }
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        match self {
            Storage::Inline(vec) => vec.as_slice(),
            Storage::Spilled(vec) => vec.as_slice(),
        }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Storage::Inline(vec) => vec.as_mut_slice(),
            Storage::Spilled(vec) => vec.as_mut_slice(),
        }
    }

    // --- Modification ---

    /// Makes room for `additional` more elements, spilling if inline space
    /// is insufficient.
    pub(crate) fn reserve(&mut self, additional: usize) {
        let needs_spill = match self {
            Storage::Inline(vec) => vec.len() + additional > N,
            Storage::Spilled(vec) => {
                vec.reserve(additional);
                false
            }
        };
        if needs_spill {
            self.spill(additional);
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        let item = match self {
            Storage::Inline(vec) => match vec.push(item) {
                Ok(()) => return,
                // Inline storage is full; the rejected item comes back to us.
                Err(item) => item,
            },
            Storage::Spilled(vec) => {
                vec.push(item);
                return;
            }
        };
        self.spill(1).push(item);
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Panics if `index >= len`; callers validate first.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        match self {
            Storage::Inline(vec) => vec.remove(index),
            Storage::Spilled(vec) => vec.remove(index),
        }
    }

    /// Drops `count` elements starting at `start`, shifting the tail left.
    ///
    /// Panics if `start + count > len`; callers validate first.
    pub(crate) fn remove_range(&mut self, start: usize, count: usize) {
        match self {
            Storage::Inline(vec) => {
                // heapless has no drain: rotate the doomed span to the end, then cut it off.
                let len = vec.len();
                vec[start..].rotate_left(count);
                vec.truncate(len - count);
            }
            Storage::Spilled(vec) => {
                vec.drain(start..start + count);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Storage::Inline(vec) => vec.clear(),
            Storage::Spilled(vec) => vec.clear(),
        }
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Storage::Inline(vec) => vec.into_iter().collect(),
            Storage::Spilled(vec) => vec,
        }
    }

    // --- Internal Helpers ---

    /// Moves inline elements to the heap and returns the heap vector.
    #[inline(never)]
    fn spill(&mut self, additional: usize) -> &mut Vec<T> {
        if let Storage::Inline(_) = self {
            let previous = mem::replace(self, Storage::Spilled(Vec::new()));
            if let Storage::Inline(inline) = previous {
                let len = inline.len();
                // Double the inline capacity so repeated pushes stay amortized.
                let mut heap = Vec::with_capacity((N * 2).max(len + additional));
                heap.extend(inline);
                log::trace!(
                    "collection spilled {} elements from inline capacity {} to heap",
                    len,
                    N
                );
                *self = Storage::Spilled(heap);
            }
        }
        match self {
            Storage::Spilled(heap) => heap,
            Storage::Inline(_) => unreachable!("storage was spilled above"),
        }
    }
}

impl<T, const N: usize> Default for Storage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// --- Iterators ---

/// An owning iterator over the elements of a [`Collection`](crate::Collection).
pub struct IntoIter<T, const N: usize> {
    inner: IntoIterInner<T, N>,
}

enum IntoIterInner<T, const N: usize> {
    Inline(heapless::vec::IntoIter<T, N, usize>),
    Spilled(std::vec::IntoIter<T>),
}

impl<T, const N: usize> IntoIterator for Storage<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        let inner = match self {
            Storage::Inline(vec) => IntoIterInner::Inline(vec.into_iter()),
            Storage::Spilled(vec) => IntoIterInner::Spilled(vec.into_iter()),
        };
        IntoIter { inner }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIterInner::Inline(iter) => iter.next(),
            IntoIterInner::Spilled(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IntoIterInner::Inline(iter) => iter.size_hint(),
            IntoIterInner::Spilled(iter) => iter.size_hint(),
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
