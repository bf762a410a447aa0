//! The cell store: parallel `base` and `check` arrays indexed by state.

use super::free_slots::FreeSlots;

/// Index of the root state.
pub const ROOT: usize = 0;

/// Offset given to the root on creation; every other state starts at index 1 or later.
pub(crate) const ROOT_OFFSET: usize = 1;

/// The `base` half of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    /// No state lives in this cell.
    Unassigned,
    /// The state has no children yet.
    Leaf,
    /// The state's transition on symbol `c` lands on cell `offset + c`.
    Offset(usize),
}

/// The `check` half of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Check {
    /// The cell is free.
    Unassigned,
    /// The cell holds the root state.
    Root,
    /// The cell holds a child of the given state.
    Owner(usize),
}

/// The transition table of a double-array trie.
///
/// Alongside `base` and `check` every cell carries an `accepting` flag, so a state
/// keeps its "a sequence ends here" mark after being promoted from leaf to internal.
///
/// Free-slot membership is derived from `check` alone: writing [`Check::Unassigned`]
/// frees a cell and writing anything else claims it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellStore {
    base: Vec<Base>,
    check: Vec<Check>,
    accepting: Vec<bool>,
    free: FreeSlots,
}

impl CellStore {
    /// Creates a store holding only the root state.
    pub fn new() -> Self {
        CellStore {
            base: vec![Base::Offset(ROOT_OFFSET)],
            check: vec![Check::Root],
            accepting: vec![false],
            free: FreeSlots::new(),
        }
    }

    /// Returns the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Always false: the root cell exists from creation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Returns the `base` of cell `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn base(&self, index: usize) -> Base {
        self.base[index]
    }

    /// Returns the `check` of cell `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn check(&self, index: usize) -> Check {
        self.check[index]
    }

    /// True if a sequence ends at the state in cell `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn is_accepting(&self, index: usize) -> bool {
        self.accepting[index]
    }

    /// Returns the index of currently free cells.
    pub fn free_slots(&self) -> &FreeSlots {
        &self.free
    }

    /// True if `index` is a cell of this store owned by `parent`.
    #[inline]
    pub fn is_owned_by(&self, index: usize, parent: usize) -> bool {
        self.check.get(index) == Some(&Check::Owner(parent))
    }

    pub(crate) fn set_base(&mut self, index: usize, base: Base) {
        self.base[index] = base;
    }

    pub(crate) fn set_check(&mut self, index: usize, check: Check) {
        self.check[index] = check;
        if check == Check::Unassigned {
            self.free.insert(index);
        } else {
            self.free.remove(index);
        }
    }

    pub(crate) fn set_accepting(&mut self, index: usize, accepting: bool) {
        self.accepting[index] = accepting;
    }

    /// Resets every field of cell `index` and returns it to the free set.
    pub(crate) fn vacate(&mut self, index: usize) {
        self.set_base(index, Base::Unassigned);
        self.set_accepting(index, false);
        self.set_check(index, Check::Unassigned);
    }

    /// Extends the store with unassigned cells until it holds at least `min_size + 1` cells.
    pub(crate) fn grow(&mut self, min_size: usize) {
        let old_len = self.len();
        if min_size < old_len {
            return;
        }
        let new_len = min_size + 1;
        log::trace!("[GROW] {old_len} -> {new_len} cells");
        self.base.resize(new_len, Base::Unassigned);
        self.check.resize(new_len, Check::Unassigned);
        self.accepting.resize(new_len, false);
        self.free.extend(old_len..new_len);
    }

    /// Returns the offset of `state`, which must be an internal state.
    pub(crate) fn offset(&self, state: usize) -> usize {
        match self.base(state) {
            Base::Offset(offset) => offset,
            other => {
                invariant!(false, "state {state} has no offset (base is {other:?})");
                ROOT_OFFSET
            }
        }
    }
}

impl Default for CellStore {
    fn default() -> Self {
        Self::new()
    }
}
