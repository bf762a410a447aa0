//! Placement search: choosing offsets whose target cells are free.

use super::cells::CellStore;

impl CellStore {
    /// Grows the store until `limit` is a valid index.
    ///
    /// New cells start unassigned and are registered as free.
    pub(crate) fn ensure_reachable(&mut self, limit: usize) {
        if limit >= self.len() {
            self.grow(limit);
        }
    }

    /// Returns an offset that places symbol `value` on a free cell.
    ///
    /// The target is the smallest free index strictly greater than `value`, so the
    /// returned offset is at least one and never reaches the root.
    pub(crate) fn next_available_hop(&mut self, value: u32) -> usize {
        let value = value as usize;
        loop {
            if let Some(index) = self.free_slots().smallest_free_greater_than(value) {
                return index - value;
            }
            self.ensure_reachable(self.len().max(value + 1));
        }
    }

    /// Returns an offset that places every symbol in `values` on a free cell.
    ///
    /// `values` must be sorted ascending and non-empty. All symbols between the
    /// smallest and the largest are mapped into one contiguous free run.
    pub(crate) fn next_available_move(&mut self, values: &[u32]) -> usize {
        let (min, max) = match values {
            [] => {
                invariant!(false, "placement requested for no symbols");
                return self.next_available_hop(0);
            }
            [single] => return self.next_available_hop(*single),
            [first, .., last] => (*first as usize, *last as usize),
        };
        invariant!(min < max, "symbols {values:?} are not sorted and distinct");

        let span = max - min + 1;
        if let Some(start) = self.free_slots().first_free_run_from(min, span) {
            return start - min;
        }

        let start = self.len().max(min);
        self.ensure_reachable(start + span - 1);
        start - min
    }
}

#[cfg(test)]
mod test {
    use super::super::cells::{Check, ROOT};
    use super::*;

    fn claim(cells: &mut CellStore, indices: &[usize]) {
        for &i in indices {
            cells.ensure_reachable(i);
            cells.set_check(i, Check::Owner(ROOT));
        }
    }

    #[test]
    fn ensure_reachable_makes_index_valid() {
        let mut cells = CellStore::new();
        cells.ensure_reachable(6);
        assert_eq!(cells.len(), 7);
        cells.ensure_reachable(3);
        assert_eq!(cells.len(), 7);
    }

    #[test]
    fn hop_grows_an_empty_store() {
        let mut cells = CellStore::new();
        let offset = cells.next_available_hop(3);
        assert_eq!(offset, 1);
        assert!(cells.free_slots().contains(offset + 3));
    }

    #[test]
    fn hop_uses_first_free_cell_above_value() {
        let mut cells = CellStore::new();
        cells.ensure_reachable(8);
        claim(&mut cells, &[1, 2, 3, 4, 6]);
        assert_eq!(cells.next_available_hop(0), 5);
        assert_eq!(cells.next_available_hop(5), 2);
        assert_eq!(cells.next_available_hop(7), 1);
    }

    #[test]
    fn hop_grows_past_owned_tail() {
        let mut cells = CellStore::new();
        claim(&mut cells, &[1, 2, 3]);
        assert!(cells.free_slots().is_empty());
        let offset = cells.next_available_hop(1);
        assert_eq!(offset + 1, 4);
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn move_with_one_symbol_is_a_hop() {
        let mut cells = CellStore::new();
        cells.ensure_reachable(4);
        claim(&mut cells, &[1, 2]);
        assert_eq!(cells.next_available_move(&[2]), 1);
    }

    #[test]
    fn move_finds_existing_run() {
        let mut cells = CellStore::new();
        cells.ensure_reachable(12);
        claim(&mut cells, &[1, 2, 3, 5, 6, 9]);
        // Symbols 1 and 3 need three consecutive cells: 10, 11, 12.
        assert_eq!(cells.next_available_move(&[1, 3]), 9);
        // Symbols 0 and 1 fit in 7, 8.
        assert_eq!(cells.next_available_move(&[0, 1]), 7);
    }

    #[test]
    fn move_grows_when_no_run_fits() {
        let mut cells = CellStore::new();
        claim(&mut cells, &[1, 2, 3]);
        let offset = cells.next_available_move(&[0, 4]);
        assert_eq!(offset, 4);
        assert_eq!(cells.len(), 9);
        assert!((4..9).all(|i| cells.free_slots().contains(i)));
    }

    #[test]
    fn move_never_returns_negative_offset() {
        let mut cells = CellStore::new();
        cells.ensure_reachable(3);
        // Cells 1..=3 are free but start before the smallest symbol.
        let offset = cells.next_available_move(&[5, 6]);
        assert_eq!(offset + 5, 5);
        assert!(cells.free_slots().contains(5));
        assert!(cells.free_slots().contains(6));
    }
}
