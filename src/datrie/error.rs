use std::error::Error;
use std::fmt;
use std::ops::Range;

/// Errors reported by trie construction.
///
/// Only conditions that originate from caller data are reported here. A broken
/// cell store is a defect in the construction algorithm and aborts instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// A trie was requested over an alphabet with no symbols.
    EmptyAlphabet,
    /// A sequence contained a symbol outside of the trie's alphabet.
    ///
    /// Contains the offending value and the range of allowed symbols.
    InvalidSymbol {
        /// The rejected symbol.
        value: u32,
        /// The symbols accepted by the trie.
        range: Range<u32>,
    },
    /// An alphabet mapper could not translate a character into a symbol.
    UnmappedToken(char),
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::EmptyAlphabet => write!(f, "EmptyAlphabet - alphabet size must be positive"),
            TrieError::InvalidSymbol { value, range } => write!(
                f,
                "InvalidSymbol - {value} is outside of {}..{}",
                range.start, range.end
            ),
            TrieError::UnmappedToken(ch) => write!(f, "UnmappedToken - {ch:?} has no symbol"),
        }
    }
}

impl Error for TrieError {}
