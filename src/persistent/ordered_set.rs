//! Persistent (immutable) ordered set based on a left-leaning Red-Black Tree.
//!
//! This module provides [`PersistentOrderedSet`], an immutable sorted set
//! that uses structural sharing for efficient versioning.
//!
//! # Overview
//!
//! Every [`insert`](PersistentOrderedSet::insert) returns a new version of
//! the set. Only the nodes on the path from the root to the insertion point
//! are rebuilt; every other node is shared with the previous version.
//!
//! - O(log N) insert
//! - O(log N) contains
//! - O(log N) min/max
//! - O(1) len and `is_empty`
//! - O(1) per element in-order iteration (amortized), O(log N) memory
//!
//! # Examples
//!
//! ```rust
//! use wordsort::persistent::PersistentOrderedSet;
//!
//! let set = PersistentOrderedSet::new()
//!     .insert("banana".to_string())
//!     .insert("apple".to_string())
//!     .insert("cherry".to_string());
//!
//! let words: Vec<&str> = set.iter().map(String::as_str).collect();
//! assert_eq!(words, vec!["apple", "banana", "cherry"]);
//!
//! // Duplicates are a no-op
//! let same = set.insert("apple".to_string());
//! assert_eq!(same.len(), 3);
//! ```
//!
//! # Internal Structure
//!
//! The tree is kept left-leaning. After each insertion:
//! 1. Keys are in binary-search-tree order
//! 2. The root is black
//! 3. Absent children count as black leaves
//! 4. No red node has a red child, and no node has a red right child
//! 5. Every path from root to leaf has the same number of black nodes
//!
//! These invariants bound the height by `2 * log2(N + 1)`.

use super::ReferenceCounter;
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

/// Ancestors kept inline by the iterators before spilling to the heap.
///
/// Covers every tree of up to 65535 elements.
const INLINE_STACK_DEPTH: usize = 32;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a Red-Black Tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure for the Red-Black Tree.
///
/// Nodes are never modified after construction.
struct Node<T> {
    key: T,
    color: Color,
    left: Option<ReferenceCounter<Self>>,
    right: Option<ReferenceCounter<Self>>,
}

impl<T> Node<T> {
    /// Creates a new red node with no children.
    const fn new_red(key: T) -> Self {
        Self {
            key,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

impl<T: Clone> Node<T> {
    /// Creates a copy of this node with a new color.
    fn with_color(&self, color: Color) -> Self {
        Self {
            key: self.key.clone(),
            color,
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }

    /// Creates a copy of this node with new children.
    fn with_children(
        &self,
        left: Option<ReferenceCounter<Self>>,
        right: Option<ReferenceCounter<Self>>,
    ) -> Self {
        Self {
            key: self.key.clone(),
            color: self.color,
            left,
            right,
        }
    }
}

/// Helper function to check if an optional node is red.
fn is_red<T>(node: Option<&ReferenceCounter<Node<T>>>) -> bool {
    node.is_some_and(|node| node.is_red())
}

// =============================================================================
// PersistentOrderedSet Definition
// =============================================================================

/// A persistent (immutable) sorted set based on a left-leaning Red-Black Tree.
///
/// `PersistentOrderedSet` never changes once built. Inserting produces a new
/// version that shares every untouched subtree with the old one, so keeping
/// old versions around is cheap.
///
/// Elements must implement `Ord`. Iteration always yields elements in
/// strictly ascending order, each exactly once.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `insert`   | O(log N)   |
/// | `contains` | O(log N)   |
/// | `min`/`max`| O(log N)   |
/// | `len`      | O(1)       |
/// | `is_empty` | O(1)       |
/// | `iter`     | O(log N)   |
///
/// # Examples
///
/// ```rust
/// use wordsort::persistent::PersistentOrderedSet;
///
/// let first = PersistentOrderedSet::new().insert(2).insert(1);
/// let second = first.insert(3);
///
/// // The original version is untouched
/// assert_eq!(first.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(second.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct PersistentOrderedSet<T> {
    /// Root node of the tree
    root: Option<ReferenceCounter<Node<T>>>,
    /// Number of elements
    length: usize,
}

impl<T> PersistentOrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordsort::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<String> = PersistentOrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty set has height 0.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordsort::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<u32> = (0..1000).collect();
    /// assert!(set.height() <= 20);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        Self::height_of(self.root.as_ref())
    }

    fn height_of(node: Option<&ReferenceCounter<Node<T>>>) -> usize {
        node.map_or(0, |node_ref| {
            1 + Self::height_of(node_ref.left.as_ref()).max(Self::height_of(node_ref.right.as_ref()))
        })
    }

    /// Returns `true` if both sets are the same version, i.e. share one root.
    ///
    /// Two empty sets are always the same version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordsort::persistent::PersistentOrderedSet;
    ///
    /// let set = PersistentOrderedSet::new().insert("a");
    /// assert!(set.ptr_eq(&set.insert("a")));
    /// assert!(!set.ptr_eq(&set.insert("b")));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns a lazy iterator over the elements in ascending order.
    ///
    /// Iterating never modifies the set, so the same version always yields
    /// the same sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordsort::persistent::PersistentOrderedSet;
    ///
    /// let set: PersistentOrderedSet<i32> = [3, 1, 2, 3].into_iter().collect();
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentOrderedSetIterator<'_, T> {
        let mut iterator = PersistentOrderedSetIterator {
            stack: SmallVec::new(),
            remaining: self.length,
        };
        iterator.push_left_spine(self.root.as_ref());
        iterator
    }

    /// Returns the smallest element.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(left) = current.left.as_ref() {
            current = left;
        }
        Some(&current.key)
    }

    /// Returns the largest element.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(right) = current.right.as_ref() {
            current = right;
        }
        Some(&current.key)
    }

    /// Returns `true` if the set contains the element.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// the ordering on the borrowed form must match the ordering on the
    /// element type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordsort::persistent::PersistentOrderedSet;
    ///
    /// let set = PersistentOrderedSet::new().insert("hello".to_string());
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_ref();
        while let Some(node_ref) = current {
            current = match element.cmp(node_ref.key.borrow()) {
                Ordering::Less => node_ref.left.as_ref(),
                Ordering::Greater => node_ref.right.as_ref(),
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<T: Clone + Ord> PersistentOrderedSet<T> {
    /// Creates a set containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().insert(element)
    }

    /// Inserts an element into the set.
    ///
    /// Returns a new set containing every element of `self` plus `element`.
    /// `self` stays valid and unchanged. If the element is already present
    /// the returned set is the same version as `self` (see
    /// [`ptr_eq`](Self::ptr_eq)).
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordsort::persistent::PersistentOrderedSet;
    ///
    /// let set1 = PersistentOrderedSet::new().insert(1);
    /// let set2 = set1.insert(2);
    ///
    /// assert_eq!(set1.len(), 1); // Original unchanged
    /// assert_eq!(set2.len(), 2); // New version
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        let (new_root, added) = Self::insert_into_node(self.root.as_ref(), element);
        if !added {
            return self.clone();
        }

        // Make root black
        let black_root = if new_root.is_red() {
            ReferenceCounter::new(new_root.with_color(Color::Black))
        } else {
            new_root
        };

        Self {
            root: Some(black_root),
            length: self.length + 1,
        }
    }

    /// Recursive helper for insert.
    /// Returns (`new_node`, `was_added`); when nothing was added the input node comes back as is.
    fn insert_into_node(
        node: Option<&ReferenceCounter<Node<T>>>,
        element: T,
    ) -> (ReferenceCounter<Node<T>>, bool) {
        let Some(node_ref) = node else {
            return (ReferenceCounter::new(Node::new_red(element)), true);
        };

        match element.cmp(&node_ref.key) {
            Ordering::Less => {
                let (new_left, added) = Self::insert_into_node(node_ref.left.as_ref(), element);
                if !added {
                    return (ReferenceCounter::clone(node_ref), false);
                }
                let new_node = node_ref.with_children(Some(new_left), node_ref.right.clone());
                (ReferenceCounter::new(Self::balance(new_node)), true)
            }
            Ordering::Greater => {
                let (new_right, added) = Self::insert_into_node(node_ref.right.as_ref(), element);
                if !added {
                    return (ReferenceCounter::clone(node_ref), false);
                }
                let new_node = node_ref.with_children(node_ref.left.clone(), Some(new_right));
                (ReferenceCounter::new(Self::balance(new_node)), true)
            }
            Ordering::Equal => (ReferenceCounter::clone(node_ref), false),
        }
    }

    /// Restores the left-leaning invariants of a freshly rebuilt node.
    ///
    /// Each check runs against the result of the previous one; the order matters.
    fn balance(node: Node<T>) -> Node<T> {
        let node = if is_red(node.right.as_ref()) && !is_red(node.left.as_ref()) {
            Self::rotate_left(node)
        } else {
            node
        };

        let node = if node
            .left
            .as_ref()
            .is_some_and(|left| left.is_red() && is_red(left.left.as_ref()))
        {
            Self::rotate_right(node)
        } else {
            node
        };

        if is_red(node.left.as_ref()) && is_red(node.right.as_ref()) {
            Self::flip_colors(node)
        } else {
            node
        }
    }

    /// Promotes the right child; the demoted node becomes its red left child.
    ///
    /// A node without a right child is returned unchanged.
    fn rotate_left(node: Node<T>) -> Node<T> {
        if let Some(right) = node.right {
            let demoted = Node {
                key: node.key,
                color: Color::Red,
                left: node.left,
                right: right.left.clone(),
            };
            Node {
                key: right.key.clone(),
                color: node.color,
                left: Some(ReferenceCounter::new(demoted)),
                right: right.right.clone(),
            }
        } else {
            node
        }
    }

    /// Promotes the left child; the demoted node becomes its red right child.
    ///
    /// A node without a left child is returned unchanged.
    fn rotate_right(node: Node<T>) -> Node<T> {
        if let Some(left) = node.left {
            let demoted = Node {
                key: node.key,
                color: Color::Red,
                left: left.right.clone(),
                right: node.right,
            };
            Node {
                key: left.key.clone(),
                color: node.color,
                left: left.left.clone(),
                right: Some(ReferenceCounter::new(demoted)),
            }
        } else {
            node
        }
    }

    /// Turns the node red and both of its children black.
    fn flip_colors(node: Node<T>) -> Node<T> {
        let blacken = |child: Option<ReferenceCounter<Node<T>>>| {
            child.map(|child| ReferenceCounter::new(child.with_color(Color::Black)))
        };

        Node {
            key: node.key,
            color: Color::Red,
            left: blacken(node.left),
            right: blacken(node.right),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A lazy in-order iterator over the elements of a [`PersistentOrderedSet`].
///
/// Holds the chain of ancestors whose element has not been yielded yet.
pub struct PersistentOrderedSetIterator<'a, T> {
    stack: SmallVec<[&'a Node<T>; INLINE_STACK_DEPTH]>,
    remaining: usize,
}

impl<'a, T> PersistentOrderedSetIterator<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a ReferenceCounter<Node<T>>>) {
        while let Some(node_ref) = node {
            self.stack.push(node_ref);
            node = node_ref.left.as_ref();
        }
    }
}

impl<'a, T> Iterator for PersistentOrderedSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_ref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentOrderedSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for PersistentOrderedSetIterator<'_, T> {}

/// An owning in-order iterator over the elements of a [`PersistentOrderedSet`].
///
/// Nodes may be shared with other versions, so elements are cloned out.
pub struct PersistentOrderedSetIntoIterator<T> {
    stack: SmallVec<[ReferenceCounter<Node<T>>; INLINE_STACK_DEPTH]>,
    remaining: usize,
}

impl<T> PersistentOrderedSetIntoIterator<T> {
    fn push_left_spine(&mut self, mut node: Option<ReferenceCounter<Node<T>>>) {
        while let Some(node_ref) = node {
            node = node_ref.left.clone();
            self.stack.push(node_ref);
        }
    }
}

impl<T: Clone> Iterator for PersistentOrderedSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.clone());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.key.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentOrderedSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: Clone> FusedIterator for PersistentOrderedSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentOrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for PersistentOrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, element| set.insert(element))
    }
}

impl<T: Clone + Ord> Extend<T> for PersistentOrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            *self = self.insert(element);
        }
    }
}

impl<T: Clone> IntoIterator for PersistentOrderedSet<T> {
    type Item = T;
    type IntoIter = PersistentOrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iterator = PersistentOrderedSetIntoIterator {
            stack: SmallVec::new(),
            remaining: self.length,
        };
        iterator.push_left_spine(self.root);
        iterator
    }
}

impl<'a, T> IntoIterator for &'a PersistentOrderedSet<T> {
    type Item = &'a T;
    type IntoIter = PersistentOrderedSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentOrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && (self.ptr_eq(other) || self.iter().eq(other.iter()))
    }
}

impl<T: Eq> Eq for PersistentOrderedSet<T> {}

/// Computes a hash value for this set.
///
/// The length is hashed first, then each element in ascending order, so
/// equal sets hash equally regardless of insertion order.
impl<T: Hash> Hash for PersistentOrderedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentOrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentOrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentOrderedSet<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentOrderedSet<String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentOrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentOrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> PersistentOrderedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentOrderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = PersistentOrderedSet<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = PersistentOrderedSet::new();
        while let Some(element) = seq.next_element()? {
            set = set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentOrderedSet<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentOrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "arc"))]
mod multithread_tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::thread;

    #[rstest]
    fn test_ordered_set_shared_across_threads() {
        let set = Arc::new(
            ["delta", "alpha", "charlie", "bravo"]
                .into_iter()
                .map(str::to_string)
                .collect::<PersistentOrderedSet<String>>(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let set_clone = Arc::clone(&set);
                thread::spawn(move || {
                    let elements: Vec<&str> = set_clone.iter().map(String::as_str).collect();
                    assert_eq!(elements, vec!["alpha", "bravo", "charlie", "delta"]);
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("Thread panicked");
        }
    }

    #[rstest]
    fn test_ordered_set_divergent_versions() {
        let base = Arc::new(PersistentOrderedSet::singleton(0));

        let results: Vec<_> = (1..=4)
            .map(|index| {
                let base_clone = Arc::clone(&base);
                thread::spawn(move || base_clone.insert(index))
            })
            .map(|handle| handle.join().expect("Thread panicked"))
            .collect();

        for (index, set) in (1..=4).zip(&results) {
            assert_eq!(set.len(), 2);
            assert!(set.contains(&index));
            assert!(set.contains(&0));
        }
        assert_eq!(base.len(), 1);
    }
}
