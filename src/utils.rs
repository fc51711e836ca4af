//! String helpers for the boundary layers.

/// Normalize a string for matching: strip diacritics, lowercase, collapse
/// whitespace. The trie core never calls this; the CLI applies it to
/// dictionary keys and queries when asked, so "café" and "cafe" meet at
/// distance zero instead of one.
///
/// With the `unicode-normalization` feature the string is NFD-decomposed
/// and combining marks are dropped (the crate's own category-Mn classifier)
/// before folding. Without it only case and whitespace are folded, which is
/// fine for ASCII or pre-normalized input.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    use unicode_normalization::char::is_combining_mark;
    use unicode_normalization::UnicodeNormalization;

    fold_scalars(value.nfd().filter(|c| !is_combining_mark(*c)))
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    fold_scalars(value.chars())
}

/// Lowercase each scalar and collapse whitespace runs, in one pass. Leading
/// and trailing whitespace disappears entirely: a separator is only written
/// once the next word arrives.
fn fold_scalars(scalars: impl Iterator<Item = char>) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for c in scalars {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.extend(c.to_lowercase());
        }
    }
    out
}
