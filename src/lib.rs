//! # Generic Collections
//!
//! A query-style collection with LINQ-like operations (filter, map, group,
//! aggregate, sort) that lives on the stack for small sizes and automatically
//! spills to the heap when it grows larger.
//!
//! ## Key Features
//!
//! * **Query Surface:** `find`, `find_many`, `select`, `where_`, `group_by`,
//!   `sum`/`max`/`min`, `sort`/`reverse_sort`/`reverse`, all driven by closures.
//! * **Stack Optimization:** Elements are stored inline (no heap allocation) until the
//!   capacity `N` is exceeded.
//! * **Zero-Copy Spill:** When `N` is exceeded, elements are moved to the heap, not cloned.
//! * **Compile-Time Safety:** Enforces a 16KB limit on the inline footprint to prevent
//!   accidental stack overflows.
//! * **Explicit Absence:** "not found" is `None`; only positional removals can fail, with
//!   a [`CollectionError`].
//!
//! ## Capacity (`N`)
//!
//! `N` is the number of elements kept inline. It defaults to
//! [`DEFAULT_INLINE_CAPACITY`] (8), so `Collection<T>` is usually all you need to
//! write. Derived collections (`select`, `where_`, `group_by`) inherit the `N` of
//! their source.
//!
//! ## Examples
//!
//! ### Mutation
//!
//! ```rust
//! use generic_collections::Collection;
//!
//! let mut numbers: Collection<i32> = Collection::from_items([1, 2, 3, 4, 5]);
//! numbers.add(6);
//! numbers.add_range([7, 8, 9]);
//! assert_eq!(numbers.count(), 9);
//!
//! assert!(numbers.remove(&6));
//! numbers.remove_at(0).unwrap();
//! numbers.remove_range(1, 2).unwrap();
//! assert_eq!(numbers.get_all(), &[2, 5, 7, 8, 9]);
//!
//! // Bounds are checked, and a rejected call changes nothing.
//! assert!(numbers.remove_at(42).is_err());
//! assert_eq!(numbers.count(), 5);
//! ```
//!
//! ### Queries
//!
//! ```rust
//! use generic_collections::Collection;
//!
//! let numbers: Collection<i32> = Collection::from_items([2, 3, 4, 5, 7, 8]);
//!
//! assert_eq!(numbers.find(|&n| n > 3), Some(&4));
//! assert_eq!(numbers.where_(|n| n % 2 == 0).get_all(), &[2, 4, 8]);
//! assert_eq!(numbers.select(|n| n * 10)[0], 20);
//!
//! let groups = numbers.group_by(|n| n % 2);
//! assert_eq!(groups[&1].get_all(), &[3, 5, 7]);
//!
//! assert_eq!(numbers.sum(|&n| n as f64), 29.0);
//! assert_eq!(numbers.max(|&n| n as f64), 8.0);
//! ```
//!
//! ### Stack vs Heap
//!
//! ```rust
//! use generic_collections::Collection;
//!
//! // Capacity 2. Lives on stack.
//! let mut small: Collection<&str, 2> = Collection::new();
//! small.add("a");
//! small.add("b");
//! assert!(small.is_on_stack());
//!
//! // Third element spills to the heap.
//! small.add("c");
//! assert!(!small.is_on_stack());
//! assert_eq!(small.get_all(), &["a", "b", "c"]);
//! ```
//!
//! ## Concurrency
//!
//! There is no internal synchronization. A `Collection` is `Send`/`Sync` exactly when
//! its element type is; wrap it in a `Mutex` to share mutable access across threads.

// --- Module Declarations ---

pub mod collection;
pub mod error;
pub mod groups;
mod storage;

// --- Re-exports ---

pub use collection::{Collection, DEFAULT_INLINE_CAPACITY};
pub use error::{CollectionError, Result};
pub use groups::Groups;
pub use storage::IntoIter;
