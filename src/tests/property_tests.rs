// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the Koa Trie.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::tests::test_utils::{corpus_strategy, key_strategy, unicode_key_strategy};
use crate::KoaTrie;

proptest! {
    // Property: after inserting a set of strings, every one of them is
    // contained and strings() returns exactly that set.
    #[test]
    fn prop_round_trip(corpus in corpus_strategy()) {
        let trie: KoaTrie = corpus.iter().collect();
        let expected: BTreeSet<String> = corpus.iter().cloned().collect();

        for key in &corpus {
            prop_assert!(trie.contains(key));
        }

        let listed: BTreeSet<String> = trie.strings().into_iter().collect();
        prop_assert_eq!(listed, expected);
    }

    // Property: len() counts distinct strings, regardless of duplicates in
    // the insertion order.
    #[test]
    fn prop_len_counts_distinct_strings(corpus in corpus_strategy()) {
        let trie: KoaTrie = corpus.iter().collect();
        let distinct: BTreeSet<&String> = corpus.iter().collect();

        prop_assert_eq!(trie.len(), distinct.len());
        prop_assert_eq!(trie.is_empty(), distinct.is_empty());
    }

    // Property: a second insertion of the same key reports "already
    // present" and leaves all observable state unchanged.
    #[test]
    fn prop_insert_is_idempotent(corpus in corpus_strategy(), key in key_strategy()) {
        let mut trie: KoaTrie = corpus.iter().collect();

        let first = trie.insert(&key);
        let len_after_first = trie.len();
        let strings_after_first = trie.strings();

        let second = trie.insert(&key);

        prop_assert!(!second);
        prop_assert_eq!(first, !corpus.contains(&key));
        prop_assert_eq!(trie.len(), len_after_first);
        prop_assert_eq!(trie.strings(), strings_after_first);
    }

    // Property: every prefix of an inserted string completes to a list
    // containing that string.
    #[test]
    fn prop_prefix_soundness(corpus in corpus_strategy(), index in any::<prop::sample::Index>()) {
        if corpus.is_empty() {
            return Ok(());
        }

        let trie: KoaTrie = corpus.iter().collect();
        let key = index.get(&corpus);

        let char_count = key.chars().count();
        for prefix_len in 0..=char_count {
            let prefix: String = key.chars().take(prefix_len).collect();
            let completions = trie.complete(&prefix);
            prop_assert!(
                completions.contains(key),
                "complete({:?}) is missing {:?}",
                prefix,
                key
            );
        }
    }

    // Property: complete() agrees with a naive scan over strings().
    #[test]
    fn prop_complete_matches_naive_filter(corpus in corpus_strategy(), prefix in key_strategy()) {
        let trie: KoaTrie = corpus.iter().collect();

        let expected: Vec<String> = trie
            .strings()
            .into_iter()
            .filter(|s| s.starts_with(&prefix))
            .collect();

        prop_assert_eq!(trie.complete(&prefix), expected);
    }

    // Property: a prefix with no stored continuation completes to nothing.
    // The '#' character is outside the key alphabet, so no stored string
    // can start with it.
    #[test]
    fn prop_unmatched_prefix_completes_to_nothing(corpus in corpus_strategy()) {
        let trie: KoaTrie = corpus.iter().collect();
        prop_assert!(trie.complete("#").is_empty());
        prop_assert!(!trie.contains("#"));
    }

    // Property: the empty prefix lists every stored string.
    #[test]
    fn prop_empty_prefix_identity(corpus in corpus_strategy()) {
        let trie: KoaTrie = corpus.iter().collect();
        prop_assert_eq!(trie.complete(""), trie.strings());
    }

    // Property: traversal output is sorted and free of duplicates.
    #[test]
    fn prop_strings_sorted_and_unique(corpus in corpus_strategy()) {
        let trie: KoaTrie = corpus.iter().collect();
        let listed = trie.strings();

        let mut sorted = listed.clone();
        sorted.sort();
        sorted.dedup();

        prop_assert_eq!(listed, sorted);
    }

    // Property: symbols beyond ASCII behave as opaque characters.
    #[test]
    fn prop_unicode_keys_round_trip(keys in prop::collection::vec(unicode_key_strategy(), 0..20)) {
        let trie: KoaTrie = keys.iter().collect();

        for key in &keys {
            prop_assert!(trie.contains(key));
        }

        let expected: BTreeSet<String> = keys.iter().cloned().collect();
        let listed: BTreeSet<String> = trie.strings().into_iter().collect();
        prop_assert_eq!(trie.len(), expected.len());
        prop_assert_eq!(listed, expected);
    }
}
