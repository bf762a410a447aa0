//! Ordered bookkeeping of the cell indices that no state owns.

use std::collections::BTreeSet;
use std::ops::Bound;

/// The set of currently unowned cell indices, kept in ascending order.
///
/// Placement needs successor queries ("the first free index after `x`") and runs of
/// consecutive free indices, so the set is backed by an ordered tree rather than a hash set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FreeSlots {
    slots: BTreeSet<usize>,
}

impl FreeSlots {
    /// Creates an empty index.
    pub fn new() -> Self {
        FreeSlots {
            slots: BTreeSet::new(),
        }
    }

    /// Returns true if `index` is free.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains(&index)
    }

    /// Marks `index` as free.
    #[inline]
    pub fn insert(&mut self, index: usize) {
        self.slots.insert(index);
    }

    /// Marks `index` as owned.
    #[inline]
    pub fn remove(&mut self, index: usize) {
        self.slots.remove(&index);
    }

    /// Returns the number of free indices.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if every known index is owned.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the free indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }

    /// Returns the smallest free index strictly greater than `index`.
    pub fn smallest_free_greater_than(&self, index: usize) -> Option<usize> {
        self.slots
            .range((Bound::Excluded(index), Bound::Unbounded))
            .next()
            .copied()
    }

    /// Returns the start of the earliest block of `length` consecutive free indices.
    pub fn first_free_run_of_length(&self, length: usize) -> Option<usize> {
        self.first_free_run_from(0, length)
    }

    /// Returns the start of the earliest block of `length` consecutive free indices
    /// that begins at or after `start`.
    ///
    /// This is a single pass over the free set, never over the whole store.
    pub fn first_free_run_from(&self, start: usize, length: usize) -> Option<usize> {
        if length == 0 {
            return Some(start);
        }
        let mut run_start = 0;
        let mut run_length = 0;
        let mut previous = None;
        for &index in self.slots.range(start..) {
            if previous.is_some_and(|p| index == p + 1) {
                run_length += 1;
            } else {
                run_start = index;
                run_length = 1;
            }
            if run_length == length {
                return Some(run_start);
            }
            previous = Some(index);
        }
        None
    }
}

impl Extend<usize> for FreeSlots {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.slots.extend(iter);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn slots(indices: &[usize]) -> FreeSlots {
        let mut free = FreeSlots::new();
        free.extend(indices.iter().copied());
        free
    }

    #[test]
    fn successor_is_strict() {
        let free = slots(&[2, 5, 9]);
        assert_eq!(free.smallest_free_greater_than(0), Some(2));
        assert_eq!(free.smallest_free_greater_than(2), Some(5));
        assert_eq!(free.smallest_free_greater_than(8), Some(9));
        assert_eq!(free.smallest_free_greater_than(9), None);
    }

    #[test]
    fn first_run_skips_short_runs() {
        let free = slots(&[1, 2, 4, 5, 6, 8, 9, 10, 11]);
        assert_eq!(free.first_free_run_of_length(1), Some(1));
        assert_eq!(free.first_free_run_of_length(2), Some(1));
        assert_eq!(free.first_free_run_of_length(3), Some(4));
        assert_eq!(free.first_free_run_of_length(4), Some(8));
        assert_eq!(free.first_free_run_of_length(5), None);
    }

    #[test]
    fn first_run_respects_lower_bound() {
        let free = slots(&[1, 2, 3, 7, 8, 9]);
        assert_eq!(free.first_free_run_from(2, 2), Some(2));
        assert_eq!(free.first_free_run_from(3, 2), Some(7));
        assert_eq!(free.first_free_run_from(8, 3), None);
    }

    #[test]
    fn empty_set_has_no_runs() {
        let free = FreeSlots::new();
        assert!(free.is_empty());
        assert_eq!(free.first_free_run_of_length(1), None);
        assert_eq!(free.smallest_free_greater_than(0), None);
    }

    #[test]
    fn insert_and_remove_toggle_membership() {
        let mut free = slots(&[3]);
        free.insert(4);
        assert!(free.contains(4));
        free.remove(3);
        assert!(!free.contains(3));
        assert_eq!(free.iter().collect::<Vec<_>>(), vec![4]);
        assert_eq!(free.len(), 1);
    }
}
