//! Conflict resolution: moving a state's children out of the way.
//!
//! When the cell a state wants for a new child is held by a different parent, the
//! obstructed state keeps its index and gets a new offset instead. Its existing
//! children are copied to the new region and their own children are told where their
//! parent went. Moving the obstructed state, rather than the obstructing one, means
//! the root never moves.

use super::alphabet::Symbols;
use super::cells::{Base, Check};
use super::trie::DoubleArrayTrie;

impl DoubleArrayTrie {
    /// Gives `state` a new offset under which all of its children and `new_symbol` fit.
    ///
    /// The transition on `new_symbol` itself is not created; the caller retries it.
    pub(crate) fn resolve_conflict(&mut self, state: usize, new_symbol: u32) {
        let old_offset = self.cells.offset(state);
        let children: Symbols = (0..self.alphabet_size)
            .filter(|&c| self.cells.is_owned_by(old_offset + c as usize, state))
            .collect();
        invariant!(
            !children.contains(&new_symbol),
            "state {state} already has a child on {new_symbol}"
        );

        let mut values = children.clone();
        values.insert(values.partition_point(|&c| c < new_symbol), new_symbol);
        let new_offset = self.cells.next_available_move(&values);
        log::debug!(
            "[RELOCATE] state {state} offset {old_offset} -> {new_offset}, moving {children:?} to admit {new_symbol}"
        );

        for &c in &children {
            self.move_child(state, old_offset + c as usize, new_offset + c as usize);
        }
        self.cells.set_base(state, Base::Offset(new_offset));
    }

    /// Moves the child of `parent` in cell `from` to the free cell `to`.
    fn move_child(&mut self, parent: usize, from: usize, to: usize) {
        invariant!(
            self.cells.check(from) == Check::Owner(parent),
            "cell {from} is not a child of {parent} ({:?})",
            self.cells.check(from)
        );
        invariant!(
            self.cells.check(to) == Check::Unassigned,
            "cell {to} is not free ({:?})",
            self.cells.check(to)
        );

        let base = self.cells.base(from);
        self.cells.set_check(to, Check::Owner(parent));
        self.cells.set_base(to, base);
        self.cells.set_accepting(to, self.cells.is_accepting(from));

        if let Base::Offset(child_offset) = base {
            for d in 0..self.alphabet_size {
                let grandchild = child_offset + d as usize;
                // Children lie at increasing indices; nothing past the end belongs to us.
                if grandchild >= self.cells.len() {
                    break;
                }
                if self.cells.check(grandchild) == Check::Owner(from) {
                    self.cells.set_check(grandchild, Check::Owner(to));
                }
            }
        }

        self.cells.vacate(from);
    }
}
