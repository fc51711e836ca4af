//! Edit-distance typeahead: a Unicode trie with Levenshtein-automaton lookup.
//!
//! A [`Trie`] is a string-to-string map that also answers *approximate*
//! queries: given a word, a distance bound, and a result cap, it returns
//! stored entries whose keys are within that many single-scalar edits
//! (insert, delete, substitute) of the word, nearest first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │   trie.rs   │────▶│  search.rs   │────▶│ levenshtein_nfa.rs │
//! │ (Trie, point│     │ (stratified  │     │ (diagonal-window   │
//! │  operations)│     │  traversal)  │     │  state simulation) │
//! └─────────────┘     └──────────────┘     └────────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────┐
//! │   dict.rs / utils.rs / levenshtein.rs   │
//! │   (CLI loading, normalization, and the  │
//! │    reference DP distance - boundary     │
//! │    helpers, not on the lookup path)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The trie is walked in lockstep with a lazily-simulated Levenshtein NFA:
//! every edge transitions the automaton's active-state set, edges whose
//! minimum distance exceeds the bound are pruned, and pending branches are
//! scheduled by that minimum so near matches surface before far ones. A
//! result limit therefore stops the walk early; the typical typeahead call
//! touches a small fraction of the trie.
//!
//! # Usage
//!
//! ```
//! use talpa::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("receive", "");
//! trie.insert("recall", "");
//!
//! // The transposed "ie" costs two edits (no transposition primitive):
//! let hits = trie.suggest("recieve", 2, 5);
//! assert_eq!(hits[0].key, "receive");
//!
//! // Typeahead over everything continuing a near-match of the input:
//! let completions = trie.suggest_suffixes("reci", 1, 10);
//! assert_eq!(completions.len(), 2);
//! ```

// Module declarations
mod dict;
mod levenshtein;
mod levenshtein_nfa;
mod search;
mod trie;
mod utils;

// Re-exports for public API
pub use dict::load_dictionary;
pub use levenshtein::{levenshtein, levenshtein_bounded};
pub use search::{Suggestion, MAX_DISTANCE};
pub use trie::Trie;
pub use utils::normalize;
