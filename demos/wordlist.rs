//! Example: feeding a word list through an alphabet mapper into a double-array trie.
//!
//! Run with: cargo run --example wordlist
//! Set `RUST_LOG=debug` to watch leaf promotions and relocations.

use libdatrie::datrie::{Alphabet, DoubleArrayTrie, LowercaseAscii};

fn main() {
    env_logger::init();

    let words = [
        "cat", "car", "cargo", "cabin", "metal", "mental", "metallica", "mask", "tree", "train",
        "dispatcher",
    ];

    let mut trie = DoubleArrayTrie::new(LowercaseAscii.size()).unwrap();
    for word in words {
        let changed = trie.insert(LowercaseAscii.encode(word).unwrap()).unwrap();
        println!("  insert {word}: {}", if changed { "changed" } else { "no-op" });
    }
    println!("alphabet size: {}", trie.alphabet_size());
    println!(
        "{} words in {} cells ({} free)",
        trie.len(),
        trie.cells().len(),
        trie.cells().free_slots().len()
    );

    println!("\nWord lookup:");
    for word in ["car", "carg", "metallica", "metals", "train"] {
        let found = trie.contains(LowercaseAscii.encode(word).unwrap());
        println!("  {word}: {}", if found { "yes" } else { "no" });
    }

    println!("\nAll words:");
    for sequence in trie.sequences() {
        let word: String = sequence
            .iter()
            .map(|&c| char::from(b'a' + c as u8))
            .collect();
        println!("  {word}");
    }
}
