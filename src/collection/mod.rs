//! Ordered key-value collections.
//!
//! This module provides the [`OrderedCollection`] contract and its
//! height-balanced tree backend:
//!
//! - [`OrderedCollection`]: the abstract contract for a sorted key-value
//!   store (add/remove/find/range-find/keys/size/height)
//! - [`AvlTreeMap`]: a mutable ordered map backed by an AVL tree
//!
//! # The Contract
//!
//! `OrderedCollection` captures what callers may rely on without naming a
//! backend: logarithmic point operations, ascending key order, and closed
//! interval range queries. Other backends (an unbalanced tree, a sorted
//! vector) could satisfy the same contract; only the AVL backend is
//! provided here.
//!
//! # Examples
//!
//! ## `AvlTreeMap`
//!
//! ```rust
//! use arbors::collection::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! // Entries are always in sorted order
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! // Range queries
//! let in_range: Vec<&&str> = map.range(1..=2).map(|(_, value)| value).collect();
//! assert_eq!(in_range, vec![&"one", &"two"]);
//! ```
//!
//! ## Working against the contract
//!
//! ```rust
//! use arbors::collection::{AvlTreeMap, OrderedCollection};
//!
//! fn load<C: OrderedCollection<i32, i32> + Default>(entries: &[(i32, i32)]) -> C {
//!     let mut collection = C::default();
//!     for &(key, value) in entries {
//!         collection.add(key, value);
//!     }
//!     collection
//! }
//!
//! let map: AvlTreeMap<i32, i32> = load(&[(2, 20), (1, 10), (3, 30)]);
//! assert_eq!(map.len(), 3);
//! ```

use std::borrow::Borrow;

mod avl;

pub use avl::AvlTreeMap;
pub use avl::AvlTreeMapIntoIterator;
pub use avl::AvlTreeMapIterator;
pub use avl::AvlTreeMapRangeIterator;

// =============================================================================
// OrderedCollection Contract
// =============================================================================

/// The contract of a sorted key-value collection.
///
/// A conforming implementation stores at most one value per key, orders
/// entries by the key type's total order, and reports absence through
/// `Option` rather than panicking. Removal of a missing key is a no-op.
pub trait OrderedCollection<K, V> {
    /// Inserts a key-value pair.
    ///
    /// If the key is already present, its value is overwritten and the
    /// previous value is returned; the number of entries is unchanged.
    fn add(&mut self, key: K, value: V) -> Option<V>;

    /// Removes the entry with the given key, returning its value.
    ///
    /// Returns `None`, leaving the collection untouched, if the key is
    /// absent.
    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Returns the value associated with the given key, if any.
    fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Returns the values whose keys lie in the closed interval
    /// `[low, high]`, in ascending key order.
    ///
    /// An inverted interval (`low > high`) yields an empty sequence, not
    /// an error.
    fn find_range<Q>(&self, low: &Q, high: &Q) -> Vec<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Returns all keys in ascending order.
    fn keys(&self) -> Vec<&K>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the collection contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the underlying structure.
    ///
    /// An empty collection has height 0; a single entry has height 1.
    fn height(&self) -> usize;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod contract_tests {
    use super::{AvlTreeMap, OrderedCollection};
    use rstest::rstest;

    // Exercises an implementation purely through the contract.
    fn exercise<C: OrderedCollection<i32, i32> + Default>() {
        let mut collection = C::default();
        assert!(collection.is_empty());
        assert_eq!(collection.height(), 0);

        assert_eq!(collection.add(2, 20), None);
        assert_eq!(collection.add(1, 10), None);
        assert_eq!(collection.add(3, 30), None);
        assert_eq!(collection.add(2, 200), Some(20));

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.find(&2), Some(&200));
        assert_eq!(collection.find(&4), None);
        assert_eq!(collection.keys(), vec![&1, &2, &3]);
        assert_eq!(collection.find_range(&1, &2), vec![&10, &200]);
        assert_eq!(collection.find_range(&2, &1), Vec::<&i32>::new());

        assert_eq!(collection.remove(&2), Some(200));
        assert_eq!(collection.remove(&2), None);
        assert_eq!(collection.len(), 2);
    }

    #[rstest]
    fn test_avl_tree_map_satisfies_contract() {
        exercise::<AvlTreeMap<i32, i32>>();
    }
}
