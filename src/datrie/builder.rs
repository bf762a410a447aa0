use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};

use super::alphabet::Alphabet;
use super::error::TrieError;
use super::trie::DoubleArrayTrie;

/// Builds a trie over `alphabet` containing every word in `words`.
///
/// Words may come in any order and may repeat.
///
/// # Errors
///
/// Returns `TrieError::UnmappedToken` if a word contains a character outside of
/// `alphabet`, or `TrieError::EmptyAlphabet` if the alphabet has no symbols.
///
/// # Examples
///
/// ```
/// use libdatrie::datrie::{build_trie, Alphabet, LowercaseAscii};
///
/// let trie = build_trie(&LowercaseAscii, ["cat", "car", "cargo"]).unwrap();
/// assert!(trie.contains(LowercaseAscii.encode("car").unwrap()));
/// assert!(!trie.contains(LowercaseAscii.encode("carg").unwrap()));
/// ```
pub fn build_trie<A, W>(
    alphabet: &A,
    words: impl IntoIterator<Item = W>,
) -> Result<DoubleArrayTrie, TrieError>
where
    A: Alphabet + ?Sized,
    W: AsRef<str>,
{
    let mut trie = DoubleArrayTrie::new(alphabet.size())?;
    for word in words {
        trie.insert(alphabet.encode(word.as_ref())?)?;
    }
    Ok(trie)
}

/// Builds a trie over `alphabet` from a dictionary file.
///
/// Reads one word per line, ignoring surrounding whitespace. Blank lines and lines
/// starting with `#` are skipped.
///
/// # Examples
///
/// ```no_run
/// use libdatrie::datrie::{build_trie_from_file, LowercaseAscii};
///
/// let trie = build_trie_from_file(&LowercaseAscii, "words.txt").unwrap();
/// ```
pub fn build_trie_from_file<A: Alphabet + ?Sized>(
    alphabet: &A,
    filename: &str,
) -> Result<DoubleArrayTrie, Box<dyn Error>> {
    let mut trie = DoubleArrayTrie::new(alphabet.size())?;
    for line in BufReader::new(File::open(filename)?).lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        trie.insert(alphabet.encode(word)?)?;
    }
    log::debug!("[BUILD] {filename}: {} sequences in {} cells", trie.len(), trie.cells().len());
    Ok(trie)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::super::alphabet::{CharAlphabet, LowercaseAscii};
    use super::*;

    #[test]
    fn repeated_words_are_stored_once() {
        let trie = build_trie(&LowercaseAscii, ["tree", "train", "tree"]).unwrap();
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn unmapped_character_is_reported() {
        let res = build_trie(&LowercaseAscii, ["metal", "Metallica"]);
        assert_eq!(res.unwrap_err(), TrieError::UnmappedToken('M'));
    }

    #[test]
    fn empty_alphabet_is_reported() {
        let res = build_trie(&CharAlphabet::new([]), ["x"]);
        assert_eq!(res.unwrap_err(), TrieError::EmptyAlphabet);
    }

    #[test]
    fn custom_alphabet() {
        let dna = CharAlphabet::new("ACGT".chars());
        let trie = build_trie(&dna, ["GATTACA", "GATT", "CAT"]).unwrap();
        assert!(trie.contains(dna.encode("GATT").unwrap()));
        assert!(!trie.contains(dna.encode("GAT").unwrap()));
        assert!(trie.has_prefix(dna.encode("GAT").unwrap()));
        assert_eq!(trie.alphabet_size(), 4);
    }

    #[test]
    fn file_skips_comments_and_blank_lines() {
        let path = std::env::temp_dir().join(format!("libdatrie_words_{}.txt", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "# animals").unwrap();
            writeln!(file, "cat").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "   # metal").unwrap();
            writeln!(file, "\t").unwrap();
            writeln!(file, "  cargo  ").unwrap();
            writeln!(file, "#dispatcher").unwrap();
            write!(file, "mask").unwrap();
        }
        let trie = build_trie_from_file(&LowercaseAscii, path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(trie.len(), 3);
        for word in ["cat", "cargo", "mask"] {
            assert!(trie.contains(LowercaseAscii.encode(word).unwrap()), "{word}");
        }
        for word in ["metal", "dispatcher", "animals"] {
            assert!(!trie.has_prefix(LowercaseAscii.encode(word).unwrap()), "{word}");
        }
    }

    #[test]
    fn file_with_unmapped_word_is_an_error() {
        let path = std::env::temp_dir().join(format!("libdatrie_bad_{}.txt", std::process::id()));
        std::fs::write(&path, "tree\nTrain\n").unwrap();
        let res = build_trie_from_file(&LowercaseAscii, path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        let err = res.unwrap_err();
        assert_eq!(err.downcast_ref::<TrieError>(), Some(&TrieError::UnmappedToken('T')));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(build_trie_from_file(&LowercaseAscii, "/nonexistent/libdatrie/words.txt").is_err());
    }
}
