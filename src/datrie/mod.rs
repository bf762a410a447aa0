/// Asserts a structural invariant of the cell store.
///
/// Violations are defects in the construction algorithm, never bad input, so they
/// panic. Checks run in debug builds and, with the `strict-invariants` feature, in
/// release builds too.
macro_rules! invariant {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "strict-invariants")) {
            assert!($cond, $($arg)+);
        }
    };
}

/// Token-to-symbol mappers and the sequence conversion trait.
pub mod alphabet;
/// Batch construction from word lists and dictionary files.
pub mod builder;
/// The `base`/`check` cell store.
pub mod cells;
/// Error type for trie construction.
pub mod error;
/// Ordered index of free cells.
pub mod free_slots;
/// Offset search over the free cells.
mod placement;
/// Relocation of states whose target cell is taken.
mod relocate;
/// The trie itself: insertion and read-only queries.
pub mod trie;

pub use alphabet::{Alphabet, CharAlphabet, IntoSymbols, LowercaseAscii, Symbols};
pub use builder::{build_trie, build_trie_from_file};
pub use cells::{Base, CellStore, Check, ROOT};
pub use error::TrieError;
pub use free_slots::FreeSlots;
pub use trie::{Children, DoubleArrayTrie};
