//! Tree properties: search equals a linear scan, structure stays valid,
//! and persisted trees come back identical.

use bkspell::binary::{decode_tree, encode_tree, FormatFlags};
use bkspell::{check_structure, BkTree, DamerauLevenshtein, Levenshtein, SpellChecker};
use proptest::prelude::*;

use crate::common::{brute_force_search, sorted_results};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-f]{0,8}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

/// Insert everything, keeping the words that were accepted.
fn build(words: &[String]) -> (SpellChecker, Vec<String>) {
    let checker = SpellChecker::new();
    let accepted = words
        .iter()
        .filter(|word| checker.add(word).is_ok())
        .cloned()
        .collect();
    (checker, accepted)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Oracle test: the tree finds exactly what a linear scan finds.
    #[test]
    fn prop_search_matches_linear_scan(
        words in dictionary_strategy(),
        query in word_strategy(),
        tolerance in 0usize..5,
    ) {
        let (checker, accepted) = build(&words);
        prop_assert_eq!(
            sorted_results(checker.search(&query, tolerance)),
            brute_force_search(&accepted, &query, tolerance, &DamerauLevenshtein)
        );
    }

    #[test]
    fn prop_search_matches_linear_scan_levenshtein(
        words in dictionary_strategy(),
        query in word_strategy(),
        tolerance in 0usize..4,
    ) {
        let checker = SpellChecker::with_metric(Levenshtein);
        let accepted: Vec<String> = words
            .iter()
            .filter(|word| checker.add(word).is_ok())
            .cloned()
            .collect();
        prop_assert_eq!(
            sorted_results(checker.search(&query, tolerance)),
            brute_force_search(&accepted, &query, tolerance, &Levenshtein)
        );
    }

    /// Every non-empty distinct word is stored once; nothing else is.
    #[test]
    fn prop_accepts_each_distinct_word_once(words in dictionary_strategy()) {
        let (checker, accepted) = build(&words);

        let mut expected: Vec<String> = words.iter().filter(|w| !w.is_empty()).cloned().collect();
        expected.sort();
        expected.dedup();

        let mut stored: Vec<String> = checker.snapshot().words().map(str::to_string).collect();
        stored.sort();

        prop_assert_eq!(&stored, &expected);
        prop_assert_eq!(accepted.len(), expected.len());
        for word in &expected {
            prop_assert!(checker.contains(word));
        }
    }

    /// Structure and stored distances hold after any insertion sequence.
    #[test]
    fn prop_tree_always_verifies(words in dictionary_strategy()) {
        let (checker, accepted) = build(&words);
        let report = checker.verify().unwrap();
        prop_assert_eq!(report.node_count, accepted.len());
        prop_assert!(report.depth <= accepted.len());
    }

    /// Results carry true distances, each word at most once.
    #[test]
    fn prop_results_are_exact(
        words in dictionary_strategy(),
        query in word_strategy(),
        tolerance in 0usize..5,
    ) {
        let (checker, _) = build(&words);
        let results = checker.search(&query, tolerance);

        let mut seen = std::collections::HashSet::new();
        for result in &results {
            prop_assert!(result.distance <= tolerance);
            prop_assert_eq!(result.distance, bkspell::damerau_levenshtein(&result.word, &query));
            prop_assert!(seen.insert(result.word.clone()), "{} returned twice", result.word);
        }
    }

    /// Binary and JSON encodings both reproduce the tree exactly.
    #[test]
    fn prop_persisted_tree_is_identical(words in dictionary_strategy(), folded in any::<bool>()) {
        let tree = build(&words).0.into_tree();

        let flags = if folded { FormatFlags::new().with_folded() } else { FormatFlags::new() };
        let (header, decoded) = decode_tree(&encode_tree(&tree, flags).unwrap()).unwrap();
        prop_assert_eq!(header.flags.is_folded(), folded);
        prop_assert_eq!(&decoded, &tree);

        let json = serde_json::to_string(&tree).unwrap();
        let back: BkTree = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&back, &tree);
    }

    /// Corrupted bytes are rejected or decode to a structurally valid tree;
    /// never a panic.
    #[test]
    fn prop_decoding_garbage_never_panics(
        words in dictionary_strategy(),
        flips in prop::collection::vec((any::<prop::sample::Index>(), any::<u8>()), 1..4),
    ) {
        let tree = build(&words).0.into_tree();
        let mut bytes = encode_tree(&tree, FormatFlags::new()).unwrap();
        for (index, value) in flips {
            let i = index.index(bytes.len());
            bytes[i] ^= value;
        }
        if let Ok((_, decoded)) = decode_tree(&bytes) {
            prop_assert!(check_structure(decoded.nodes()).is_ok());
        }
    }
}
