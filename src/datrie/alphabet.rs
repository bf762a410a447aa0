use hashbrown::HashMap;
use smallvec::SmallVec;

use super::error::TrieError;

/// Symbol sequences collected for insertion or lookup.
pub type Symbols = SmallVec<[u32; 32]>;

/// Trait for types that can be used as a symbol sequence.
///
/// Implemented for slices, vectors and arrays of `u32` so that
/// [`DoubleArrayTrie::insert`](super::trie::DoubleArrayTrie::insert) accepts them directly.
/// Text goes through an [`Alphabet`] first.
pub trait IntoSymbols {
    /// Collects this sequence into a symbol buffer.
    fn collect_symbols(self) -> Symbols;
}

impl IntoSymbols for &[u32] {
    fn collect_symbols(self) -> Symbols {
        self.iter().copied().collect()
    }
}

impl IntoSymbols for Vec<u32> {
    fn collect_symbols(self) -> Symbols {
        self.into_iter().collect()
    }
}

impl IntoSymbols for &Vec<u32> {
    fn collect_symbols(self) -> Symbols {
        self.iter().copied().collect()
    }
}

impl IntoSymbols for Symbols {
    fn collect_symbols(self) -> Symbols {
        self
    }
}

impl IntoSymbols for &Symbols {
    fn collect_symbols(self) -> Symbols {
        self.clone()
    }
}

impl<const N: usize> IntoSymbols for [u32; N] {
    fn collect_symbols(self) -> Symbols {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoSymbols for &[u32; N] {
    fn collect_symbols(self) -> Symbols {
        self.iter().copied().collect()
    }
}

/// Maps characters onto the dense symbol range `0..size()`.
pub trait Alphabet {
    /// Number of symbols; the alphabet size of tries fed by this mapper.
    fn size(&self) -> u32;

    /// Returns the symbol for `ch`, or `None` if the character is not part of the alphabet.
    fn symbol(&self, ch: char) -> Option<u32>;

    /// Encodes a whole word.
    ///
    /// # Errors
    ///
    /// Returns `TrieError::UnmappedToken` for the first character without a symbol.
    fn encode(&self, word: &str) -> Result<Symbols, TrieError> {
        word.chars()
            .map(|ch| self.symbol(ch).ok_or(TrieError::UnmappedToken(ch)))
            .collect()
    }
}

/// The 26 lowercase ASCII letters, `'a'` being symbol 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LowercaseAscii;

impl Alphabet for LowercaseAscii {
    fn size(&self) -> u32 {
        26
    }

    fn symbol(&self, ch: char) -> Option<u32> {
        ch.is_ascii_lowercase().then(|| ch as u32 - 'a' as u32)
    }
}

/// An arbitrary set of characters, numbered in the order they were first seen.
///
/// ```
/// use libdatrie::datrie::{Alphabet, CharAlphabet};
///
/// let alphabet = CharAlphabet::new("ACGT".chars());
/// assert_eq!(alphabet.size(), 4);
/// assert_eq!(alphabet.encode("GATTACA").unwrap().as_slice(), &[2, 0, 3, 3, 0, 1, 0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CharAlphabet {
    symbols: HashMap<char, u32>,
}

impl CharAlphabet {
    /// Builds an alphabet from `chars`; repeated characters keep their first symbol.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut symbols = HashMap::new();
        for ch in chars {
            let next = symbols.len() as u32;
            symbols.entry(ch).or_insert(next);
        }
        CharAlphabet { symbols }
    }
}

impl Alphabet for CharAlphabet {
    fn size(&self) -> u32 {
        self.symbols.len() as u32
    }

    fn symbol(&self, ch: char) -> Option<u32> {
        self.symbols.get(&ch).copied()
    }
}
