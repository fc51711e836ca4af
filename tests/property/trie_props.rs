//! Property tests for the point operations.

use proptest::prelude::*;
use std::collections::BTreeSet;
use talpa::Trie;

fn word_strategy() -> impl Strategy<Value = String> {
    // Tiny alphabet: plenty of shared prefixes to stress path cleanup.
    proptest::string::string_regex("[abγ]{1,8}").unwrap()
}

fn key_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(word_strategy(), 1..25)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

proptest! {
    /// Last write wins; unrelated keys are untouched.
    #[test]
    fn insert_is_last_write_wins(
        keys in key_set(),
        duplicate in any::<prop::sample::Index>(),
    ) {
        let mut trie = Trie::new();
        for (i, key) in keys.iter().enumerate() {
            trie.insert(key, &format!("v{i}"));
        }
        let target = duplicate.get(&keys);
        trie.insert(target, "overwritten");

        prop_assert_eq!(trie.get(target), Some("overwritten"));
        prop_assert_eq!(trie.len(), keys.len());
        for (i, key) in keys.iter().enumerate() {
            if key != target {
                let expected = format!("v{i}");
                prop_assert_eq!(trie.get(key), Some(expected.as_str()));
            }
        }
    }

    /// Any insertion order followed by any deletion order ends empty.
    #[test]
    fn permuted_insert_then_delete_leaves_nothing(
        inserts in key_set().prop_shuffle(),
        deletes_seed in any::<prop::sample::Selector>(),
    ) {
        let mut trie = Trie::new();
        for key in &inserts {
            trie.insert(key, key);
        }
        prop_assert_eq!(trie.len(), inserts.len());

        // Delete in an order unrelated to insertion order.
        let mut remaining: BTreeSet<String> = inserts.iter().cloned().collect();
        while !remaining.is_empty() {
            let pick = deletes_seed.select(remaining.iter().cloned().collect::<Vec<_>>());
            trie.remove(&pick);
            remaining.remove(&pick);
            prop_assert_eq!(trie.len(), remaining.len());
        }
        prop_assert!(trie.is_empty());
        for key in &inserts {
            prop_assert_eq!(trie.get(key), None);
        }
    }

    /// Deleting a key leaves every other key's value intact.
    #[test]
    fn delete_is_local(
        keys in key_set(),
        victim in any::<prop::sample::Index>(),
    ) {
        let mut trie = Trie::new();
        for key in &keys {
            trie.insert(key, key);
        }
        let victim = victim.get(&keys).clone();
        trie.remove(&victim);

        prop_assert_eq!(trie.get(&victim), None);
        for key in &keys {
            if *key != victim {
                prop_assert_eq!(trie.get(key), Some(key.as_str()));
            }
        }
    }

    /// Deleting absent keys never changes observable state.
    #[test]
    fn delete_of_absent_key_is_identity(
        keys in key_set(),
        ghost in word_strategy(),
    ) {
        let mut trie = Trie::new();
        for key in &keys {
            trie.insert(key, key);
        }
        prop_assume!(!keys.contains(&ghost));

        let before_len = trie.len();
        let before = trie.suggest(&ghost, 3, usize::MAX);
        trie.remove(&ghost);
        prop_assert_eq!(trie.len(), before_len);
        prop_assert_eq!(trie.suggest(&ghost, 3, usize::MAX), before);
        for key in &keys {
            prop_assert_eq!(trie.get(key), Some(key.as_str()));
        }
    }
}
