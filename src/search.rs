//! Distance-stratified traversal of the trie under a Levenshtein automaton.
//!
//! The walk carries a `(node, state-set)` frame per pending branch. Frames
//! are not queued in one stack but in `d+1` of them, indexed by the state
//! set's minimum error count. Because that minimum never decreases along a
//! transition chain, stack `i` only receives frames while stack `i` itself
//! is being drained; once it runs dry the traversal moves to `i+1` and never
//! looks back. Matches therefore come out in nondecreasing order of that
//! visit-time minimum (the distance from the key to the nearest query
//! prefix), and a result limit cuts the walk off early, which is the whole
//! point for typeahead: a handful of near suggestions is cheap even when
//! the distance budget would admit thousands.
//!
//! What happens at an accepted node is a policy:
//!
//! - `Exact` emits the node's own entry (if any) and keeps walking into the
//!   subtree, since deeper keys may also lie within the distance budget.
//! - `Expand` emits *every* entry below the node and halts the outer walk
//!   for that subtree, so nothing below is visited twice.

use serde::{Deserialize, Serialize};

use crate::levenshtein_nfa::{LevenshteinNfa, StateSet};
use crate::trie::Node;

/// Largest supported distance bound. Error counts live in 8-bit cells where
/// `max_dist + 1` is the dead-diagonal sentinel, so the bound itself must
/// leave that value representable.
pub const MAX_DISTANCE: u8 = 126;

/// One approximate-match hit: a stored entry, cloned out of the trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub key: String,
    pub value: String,
}

/// What to do with the subtree below an accepted node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SuffixPolicy {
    /// Emit only the accepted node's entry; keep walking.
    Exact,
    /// Emit the whole subtree below the accepted node, then halt it.
    Expand,
}

/// Walk the trie from `start`, guided by a Levenshtein automaton for
/// `(query, max_dist)`, emitting up to `limit` entries nearest-first.
///
/// Panics when `max_dist` exceeds [`MAX_DISTANCE`]; every other input is
/// total and a mismatch simply yields an empty result.
pub(crate) fn traverse(
    start: &Node,
    query: Vec<char>,
    max_dist: u8,
    limit: usize,
    policy: SuffixPolicy,
) -> Vec<Suggestion> {
    assert!(
        max_dist <= MAX_DISTANCE,
        "distance bound {} exceeds MAX_DISTANCE ({})",
        max_dist,
        MAX_DISTANCE
    );
    if limit == 0 {
        return Vec::new();
    }

    let mut nfa = LevenshteinNfa::new(query, max_dist);
    let mut strata: Vec<Vec<(&Node, StateSet)>> =
        (0..=usize::from(max_dist)).map(|_| Vec::new()).collect();
    let start_set = nfa.start();
    strata[usize::from(start_set.lowest())].push((start, start_set));

    let mut results = Vec::new();
    for stratum in 0..strata.len() {
        while let Some((node, set)) = strata[stratum].pop() {
            let mut descend = true;
            if nfa.is_accepting(&set) {
                match policy {
                    SuffixPolicy::Exact => {
                        if let Some(entry) = &node.entry {
                            results.push(Suggestion {
                                key: entry.key.clone(),
                                value: entry.value.clone(),
                            });
                        }
                    }
                    SuffixPolicy::Expand => {
                        collect_subtree(node, limit, &mut results);
                        descend = false;
                    }
                }
                if results.len() >= limit {
                    results.truncate(limit);
                    return results;
                }
            }
            if descend {
                for (&label, child) in &node.children {
                    let (next, lowest) = nfa.transition(&set, label);
                    if lowest <= max_dist {
                        strata[usize::from(lowest)].push((child, next));
                    }
                }
            }
        }
    }
    results
}

/// Emit every entry in the subtree rooted at `node`, LIFO over ascending
/// child order, stopping once `limit` entries have accumulated overall.
fn collect_subtree(node: &Node, limit: usize, results: &mut Vec<Suggestion>) {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        if let Some(entry) = &node.entry {
            results.push(Suggestion {
                key: entry.key.clone(),
                value: entry.value.clone(),
            });
            if results.len() >= limit {
                return;
            }
        }
        stack.extend(node.children.values());
    }
}
