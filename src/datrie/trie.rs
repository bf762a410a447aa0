use std::fmt;
use std::ops::Range;

use itertools::{Itertools, Position};

use super::alphabet::IntoSymbols;
use super::cells::{Base, CellStore, Check, ROOT};
use super::error::TrieError;

/// A double-array trie over the symbols `0..alphabet_size`.
///
/// States are plain cell indices. Sequences are added one at a time with
/// [`insert`](DoubleArrayTrie::insert); when two parents compete for a cell, the
/// state being extended is relocated to a free region.
///
/// # Examples
///
/// ```
/// use libdatrie::datrie::DoubleArrayTrie;
///
/// let mut trie = DoubleArrayTrie::new(4).unwrap();
/// assert!(trie.insert([1, 2, 3]).unwrap());
/// assert!(!trie.insert([1, 2, 3]).unwrap()); // already present
/// assert!(trie.contains([1, 2, 3]));
/// assert!(!trie.contains([1, 2]));
/// assert!(trie.has_prefix([1, 2]));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DoubleArrayTrie {
    pub(crate) alphabet_size: u32,
    pub(crate) cells: CellStore,
    len: usize,
}

/// Outcome of following one transition during insertion.
enum Step {
    /// The transition already existed.
    Existing(usize),
    /// The target cell was free and now belongs to the walking state.
    Claimed(usize),
}

impl DoubleArrayTrie {
    /// Creates an empty trie for symbols in `0..alphabet_size`.
    ///
    /// # Errors
    ///
    /// Returns `TrieError::EmptyAlphabet` if `alphabet_size` is zero.
    pub fn new(alphabet_size: u32) -> Result<Self, TrieError> {
        if alphabet_size == 0 {
            return Err(TrieError::EmptyAlphabet);
        }
        Ok(DoubleArrayTrie {
            alphabet_size,
            cells: CellStore::new(),
            len: 0,
        })
    }

    /// Returns the number of symbols in the alphabet.
    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    /// Returns the range of valid symbols.
    pub fn symbols(&self) -> Range<u32> {
        0..self.alphabet_size
    }

    /// Returns the number of sequences in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no sequence has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the underlying cell store.
    pub fn cells(&self) -> &CellStore {
        &self.cells
    }

    /// Adds a sequence to the trie.
    ///
    /// Returns `true` if the trie changed: a state was created, promoted or relocated,
    /// or an existing state was newly marked as the end of a sequence. Inserting a
    /// sequence that is already present returns `false`. The empty sequence is never
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns `TrieError::InvalidSymbol` if any symbol lies outside of the alphabet.
    /// The trie is left untouched in that case.
    pub fn insert(&mut self, sequence: impl IntoSymbols) -> Result<bool, TrieError> {
        let symbols = sequence.collect_symbols();
        if let Some(&value) = symbols.iter().find(|&&c| c >= self.alphabet_size) {
            return Err(TrieError::InvalidSymbol {
                value,
                range: self.symbols(),
            });
        }

        let mut changed = false;
        let mut state = ROOT;
        for (i, (position, symbol)) in symbols.iter().copied().with_position().enumerate() {
            let last = matches!(position, Position::Last | Position::Only);
            if self.cells.base(state) == Base::Leaf {
                let offset = self.cells.next_available_hop(symbol);
                log::debug!("[INSERT] promoting leaf {state} to offset {offset}");
                self.cells.set_base(state, Base::Offset(offset));
                changed = true;
            }

            let target = match self.step(state, symbol, &mut changed) {
                Step::Existing(target) => target,
                Step::Claimed(target) => {
                    let base = if last {
                        Base::Leaf
                    } else {
                        Base::Offset(self.cells.next_available_hop(symbols[i + 1]))
                    };
                    self.cells.set_base(target, base);
                    changed = true;
                    target
                }
            };

            if last && !self.cells.is_accepting(target) {
                self.cells.set_accepting(target, true);
                self.len += 1;
                changed = true;
            }
            state = target;
        }
        Ok(changed)
    }

    /// Follows the transition from `state` on `symbol`, claiming its cell if it is free.
    ///
    /// A cell held by another parent relocates `state` once; afterwards the
    /// recomputed cell is guaranteed to be free.
    fn step(&mut self, state: usize, symbol: u32, changed: &mut bool) -> Step {
        let mut relocated = false;
        loop {
            let target = self.cells.offset(state) + symbol as usize;
            self.cells.ensure_reachable(target);
            match self.cells.check(target) {
                Check::Unassigned => {
                    log::trace!("[INSERT] {state} --{symbol}--> {target} (new)");
                    self.cells.set_check(target, Check::Owner(state));
                    return Step::Claimed(target);
                }
                Check::Owner(owner) if owner == state => return Step::Existing(target),
                taken => {
                    invariant!(
                        !relocated,
                        "state {state} still conflicts at cell {target} ({taken:?}) after relocation"
                    );
                    log::trace!("[INSERT] {state} --{symbol}--> {target} is taken ({taken:?})");
                    self.resolve_conflict(state, symbol);
                    relocated = true;
                    *changed = true;
                }
            }
        }
    }

    /// Returns the state reached from `state` on `symbol`, if that transition exists.
    pub fn transition(&self, state: usize, symbol: u32) -> Option<usize> {
        if symbol >= self.alphabet_size || state >= self.cells.len() {
            return None;
        }
        match self.cells.base(state) {
            Base::Offset(offset) => {
                let target = offset + symbol as usize;
                self.cells.is_owned_by(target, state).then_some(target)
            }
            Base::Leaf | Base::Unassigned => None,
        }
    }

    /// Returns the state reached by walking `sequence` from the root.
    pub fn state_of(&self, sequence: impl IntoSymbols) -> Option<usize> {
        sequence
            .collect_symbols()
            .iter()
            .try_fold(ROOT, |state, &c| self.transition(state, c))
    }

    /// Returns true if `sequence` was inserted.
    pub fn contains(&self, sequence: impl IntoSymbols) -> bool {
        self.state_of(sequence)
            .is_some_and(|state| self.cells.is_accepting(state))
    }

    /// Returns true if some inserted sequence starts with `prefix`.
    pub fn has_prefix(&self, prefix: impl IntoSymbols) -> bool {
        self.state_of(prefix).is_some()
    }

    /// Returns an iterator over the `(symbol, state)` children of `state`, by ascending symbol.
    pub fn children(&self, state: usize) -> Children<'_> {
        Children {
            trie: self,
            state,
            symbols: self.symbols(),
        }
    }

    /// Returns every inserted sequence in lexicographic order.
    pub fn sequences(&self) -> Vec<Vec<u32>> {
        let mut sequences = Vec::with_capacity(self.len);
        let mut prefix = Vec::new();
        // One pending child iterator per level of `prefix`, plus the root's.
        let mut stack = vec![self.children(ROOT)];
        while let Some(level) = stack.last_mut() {
            match level.next() {
                Some((c, child)) => {
                    prefix.push(c);
                    if self.cells.is_accepting(child) {
                        sequences.push(prefix.clone());
                    }
                    stack.push(self.children(child));
                }
                None => {
                    stack.pop();
                    prefix.pop();
                }
            }
        }
        sequences
    }
}

impl fmt::Debug for DoubleArrayTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleArrayTrie")
            .field("alphabet_size", &self.alphabet_size)
            .field("len", &self.len)
            .field("cells", &self.cells.len())
            .field("free", &self.cells.free_slots().len())
            .finish()
    }
}

/// An iterator over the children of a trie state.
pub struct Children<'t> {
    trie: &'t DoubleArrayTrie,
    state: usize,
    symbols: Range<u32>,
}

impl Iterator for Children<'_> {
    type Item = (u32, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (trie, state) = (self.trie, self.state);
        self.symbols
            .by_ref()
            .find_map(|c| trie.transition(state, c).map(|child| (c, child)))
    }
}

#[cfg(test)]
impl DoubleArrayTrie {
    /// Checks every structural invariant of the store, panicking on the first violation.
    pub(crate) fn assert_consistent(&self) {
        let cells = &self.cells;
        let unassigned: Vec<usize> = (0..cells.len())
            .filter(|&i| cells.check(i) == Check::Unassigned)
            .collect();
        assert_eq!(cells.free_slots().iter().collect::<Vec<_>>(), unassigned);

        assert_eq!(cells.check(ROOT), Check::Root);
        assert!(matches!(cells.base(ROOT), Base::Offset(_)));

        let mut accepting = 0;
        for i in 1..cells.len() {
            match cells.check(i) {
                Check::Unassigned => {
                    assert_eq!(cells.base(i), Base::Unassigned, "free cell {i} has a base");
                    assert!(!cells.is_accepting(i), "free cell {i} is accepting");
                }
                Check::Root => panic!("cell {i} claims to be the root"),
                Check::Owner(parent) => {
                    assert!(parent < cells.len(), "cell {i} has unknown owner {parent}");
                    assert_ne!(cells.check(parent), Check::Unassigned, "owner of {i} is free");
                    let Base::Offset(offset) = cells.base(parent) else {
                        panic!("owner {parent} of cell {i} has no offset");
                    };
                    assert!(
                        i >= offset && i - offset < self.alphabet_size as usize,
                        "cell {i} is not reachable from its owner {parent}"
                    );
                    assert_ne!(cells.base(i), Base::Unassigned, "owned cell {i} has no base");
                    if cells.base(i) == Base::Leaf {
                        assert!(self.children(i).next().is_none(), "leaf {i} has children");
                        assert!(cells.is_accepting(i), "leaf {i} ends no sequence");
                    }
                    accepting += cells.is_accepting(i) as usize;
                }
            }
        }
        assert_eq!(accepting, self.len);
    }
}
