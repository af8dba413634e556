/*!
# Generalized Sets

Minimal set abstraction used for visited markers:
- dense sets -> [`NodeBitSet`]
- sparse sets -> `HashSet` / `FxHashSet`
- caller-owned marker arrays -> `[bool]`
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use num::ToPrimitive;

use crate::node::*;

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        // `HashSet::insert` reports whether the value was newly inserted
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl Set<Node> for NodeBitSet {
    fn insert(&mut self, value: Node) -> bool {
        self.set_bit(value)
    }

    fn remove(&mut self, value: &Node) -> bool {
        self.clear_bit(*value)
    }

    fn contains(&self, value: &Node) -> bool {
        self.get_bit(*value)
    }

    fn len(&self) -> usize {
        self.cardinality() as usize
    }
}

/// Allows traversals to operate on a visited-set owned by the caller
impl<T, S> Set<T> for &mut S
where
    S: Set<T> + ?Sized,
{
    fn insert(&mut self, value: T) -> bool {
        (**self).insert(value)
    }

    fn remove(&mut self, value: &T) -> bool {
        (**self).remove(value)
    }

    fn contains(&self, value: &T) -> bool {
        (**self).contains(value)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Plain marker arrays, e.g. `vec![false; n]`, indexed by node.
/// `len` counts the marked entries and is therefore linear.
impl<I> Set<I> for [bool]
where
    I: ToPrimitive,
{
    fn insert(&mut self, value: I) -> bool {
        let idx = value.to_usize().unwrap_or(usize::MAX);
        std::mem::replace(&mut self[idx], true)
    }

    fn remove(&mut self, value: &I) -> bool {
        let idx = value.to_usize().unwrap_or(usize::MAX);
        std::mem::replace(&mut self[idx], false)
    }

    fn contains(&self, value: &I) -> bool {
        let idx = value.to_usize().unwrap_or(usize::MAX);
        self[idx]
    }

    fn len(&self) -> usize {
        self.iter().filter(|&&x| x).count()
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;

    use super::*;

    fn exercise<S: Set<Node> + ?Sized>(set: &mut S) {
        assert!(set.is_empty());
        assert!(!set.insert(3));
        assert!(set.insert(3));
        assert!(!set.insert(5));
        assert!(set.contains(&3));
        assert!(!set.contains(&4));
        assert_eq!(set.len(), 2);
        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn bitset() {
        exercise(&mut NodeBitSet::new(10));
    }

    #[test]
    fn hashsets() {
        exercise(&mut HashSet::<Node>::new());
        exercise(&mut FxHashSet::<Node>::default());
    }

    #[test]
    fn bool_slice() {
        exercise(vec![false; 10].as_mut_slice());
    }
}
