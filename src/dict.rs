//! Dictionary file loading for the CLI.
//!
//! A dictionary is a plain text file with one entry per line: either a bare
//! `key` (the value defaults to the key itself) or `key<TAB>value`. Blank
//! lines are skipped. Bytes are decoded as UTF-8 with the standard
//! replacement scalar on malformed sequences, so a dirty wordlist loads
//! rather than erroring out.

use std::fs;
use std::io;
use std::path::Path;

use crate::trie::Trie;
use crate::utils::normalize;

/// Read `path` into a fresh [`Trie`]. With `normalize_keys`, keys pass
/// through [`normalize`] before insertion (values are stored untouched).
pub fn load_dictionary(path: impl AsRef<Path>, normalize_keys: bool) -> io::Result<Trie> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let mut trie = Trie::new();
    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        let (key, value) = match line.split_once('\t') {
            Some((key, value)) => (key, value),
            None => (line, line),
        };
        if normalize_keys {
            trie.insert(&normalize(key), value);
        } else {
            trie.insert(key, value);
        }
    }
    Ok(trie)
}
