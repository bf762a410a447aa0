//! # libdatrie
//!
//! An incrementally built [double-array trie](https://linux.thai.net/~thep/datrie/datrie.html)
//! for Rust.
//!
//! A double-array trie stores a trie in two parallel arrays, `base` and `check`, instead of
//! per-node child pointers. State `s` reaches its child on symbol `c` at cell `base[s] + c`,
//! and that cell belongs to `s` exactly when `check[base[s] + c] == s`. Sequences can be added
//! online in any order; when two parents compete for the same cell, the state being extended
//! is moved to a free region of the arrays.
//!
//! ## Features
//!
//! - **Online insertion**: no sorting or rebuild, each [`insert`](datrie::DoubleArrayTrie::insert)
//!   reports whether the trie changed
//! - **Bounded alphabet**: symbols are `u32` values in `0..alphabet_size`; out-of-range input is
//!   rejected with [`TrieError::InvalidSymbol`](datrie::TrieError::InvalidSymbol)
//! - **Pluggable mappers**: [`Alphabet`](datrie::Alphabet) turns text into symbols
//!
//! ## Quick Start
//!
//! ```
//! use libdatrie::datrie::{build_trie, Alphabet, LowercaseAscii};
//!
//! let trie = build_trie(&LowercaseAscii, ["cat", "car", "cargo", "cabin"]).unwrap();
//!
//! let is_word = |w: &str| trie.contains(LowercaseAscii.encode(w).unwrap());
//! assert!(is_word("car"));
//! assert!(is_word("cargo"));
//! assert!(!is_word("ca"));
//! ```
//!
//! ## Raw Symbols
//!
//! ```
//! use libdatrie::datrie::DoubleArrayTrie;
//!
//! let mut trie = DoubleArrayTrie::new(3).unwrap();
//! trie.insert([0, 1, 2]).unwrap();
//! trie.insert([0, 2]).unwrap();
//!
//! assert!(trie.contains([0, 2]));
//! assert!(trie.insert([0, 3]).is_err());
//! assert_eq!(trie.sequences(), vec![vec![0, 1, 2], vec![0, 2]]);
//! ```

#![warn(missing_docs)]

/// Double-array trie construction and lookup.
pub mod datrie;
