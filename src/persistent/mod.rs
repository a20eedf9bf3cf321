//! Persistent (immutable) data structures.
//!
//! This module provides [`PersistentOrderedSet`], a sorted set backed by a
//! persistent left-leaning Red-Black Tree.
//!
//! # Structural Sharing
//!
//! Inserting creates a new version of the set without copying the entire
//! structure: only the nodes on the path to the new element are rebuilt.
//! Older versions stay valid and can be kept, shared or dropped freely.
//!
//! # Examples
//!
//! ```rust
//! use wordsort::persistent::PersistentOrderedSet;
//!
//! let set = PersistentOrderedSet::new()
//!     .insert(3)
//!     .insert(1)
//!     .insert(2);
//!
//! // Elements are always in sorted order
//! let elements: Vec<&i32> = set.iter().collect();
//! assert_eq!(elements, vec![&1, &2, &3]);
//!
//! // Structural sharing: the original set is preserved
//! let extended = set.insert(0);
//! assert_eq!(set.len(), 3);      // Original unchanged
//! assert_eq!(extended.len(), 4); // New version
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod ordered_set;

pub use ordered_set::PersistentOrderedSet;
pub use ordered_set::PersistentOrderedSetIntoIterator;
pub use ordered_set::PersistentOrderedSetIterator;
