//! SpellChecker behavior over a realistic word list.

use crate::common::{
    brute_force_search, checker_with, child_words, edges, owned, sorted_results, DICTIONARY,
    SAMPLE_WORDS,
};
use bkspell::{DamerauLevenshtein, NodeId, SearchResult, SpellChecker, SpellError};

fn words(results: &[SearchResult]) -> Vec<&str> {
    let mut out: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
    out.sort_unstable();
    out
}

// =============================================================================
// ADD
// =============================================================================

#[test]
fn test_empty_word_leaves_tree_unchanged() {
    let checker = checker_with(SAMPLE_WORDS);
    let before = checker.snapshot();

    assert_eq!(checker.add(""), Err(SpellError::EmptyWord));
    assert_eq!(checker.snapshot(), before);
}

#[test]
fn test_empty_word_on_fresh_checker() {
    let checker = SpellChecker::new();
    assert_eq!(checker.add(""), Err(SpellError::EmptyWord));
    assert!(checker.is_empty());
    assert!(checker.snapshot().root().is_none());
}

#[test]
fn test_duplicate_adds_no_node() {
    let checker = checker_with(DICTIONARY);
    let before = checker.len();

    for word in ["hello", "snape", "café", "touchdown"] {
        let err = checker.add(word).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(
            err,
            SpellError::DuplicateWord {
                word: word.to_string()
            }
        );
    }
    assert_eq!(checker.len(), before);
    checker.verify().unwrap();
}

#[test]
fn test_words_file_under_their_distance() {
    let tree = checker_with(&["snail", "sail", "mail", "snape"]).into_tree();

    assert_eq!(tree.root().unwrap().word(), "snail");
    assert_eq!(child_words(&tree, NodeId::ROOT), ["sail", "mail"]);
    assert_eq!(
        edges(&tree),
        vec![
            ("snail".to_string(), "sail".to_string(), 1),
            ("snail".to_string(), "mail".to_string(), 2),
            ("mail".to_string(), "snape".to_string(), 4),
        ]
    );
}

#[test]
fn test_every_added_word_is_contained() {
    let checker = checker_with(DICTIONARY);
    assert_eq!(checker.len(), DICTIONARY.len());
    for word in DICTIONARY {
        assert!(checker.contains(word), "{} missing", word);
    }
    assert!(!checker.contains("zebra"));
    assert!(!checker.contains(""));
}

// =============================================================================
// SEARCH
// =============================================================================

#[test]
fn test_nail_finds_its_neighbours() {
    let checker = checker_with(SAMPLE_WORDS);
    let results = checker.search("nail", 1);

    assert_eq!(words(&results), ["mail", "rail", "sail"]);
    assert!(results.iter().all(|r| r.distance == 1));
}

#[test]
fn test_tolerance_zero_is_exact_lookup() {
    let checker = checker_with(DICTIONARY);
    assert_eq!(
        checker.search("yellow", 0),
        vec![SearchResult::new("yellow", 0)]
    );
    assert!(checker.search("yelow", 0).is_empty());
}

#[test]
fn test_typo_suggestions() {
    let checker = checker_with(DICTIONARY);

    let found = checker.search("recieve", 1);
    assert_eq!(words(&found), ["receive", "relieve"]);
    assert!(found.iter().all(|r| r.distance == 1));

    let found = checker.search("helo", 1);
    assert!(words(&found).contains(&"hello"));
    assert!(words(&found).contains(&"help"));
}

#[test]
fn test_search_on_empty_checker() {
    let checker = SpellChecker::new();
    assert!(checker.search("anything", 5).is_empty());
    assert!(checker.search("", 5).is_empty());
}

#[test]
fn test_empty_query_matches_short_words() {
    let checker = checker_with(DICTIONARY);
    let found = checker.search("", 3);
    assert_eq!(words(&found), ["boo"]);
    assert_eq!(found[0].distance, 3);
}

#[test]
fn test_large_tolerance_returns_everything() {
    let checker = checker_with(DICTIONARY);
    let found = checker.search("x", 100);
    assert_eq!(found.len(), DICTIONARY.len());
}

#[test]
fn test_matches_linear_scan() {
    let checker = checker_with(DICTIONARY);
    let dictionary = owned(DICTIONARY);

    for query in ["hallo", "nail", "bok", "cafe", "recieve", "touchdwon", "xyz"] {
        for tolerance in 0..=3 {
            assert_eq!(
                sorted_results(checker.search(query, tolerance)),
                brute_force_search(&dictionary, query, tolerance, &DamerauLevenshtein),
                "query {:?} tolerance {}",
                query,
                tolerance
            );
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let a = checker_with(DICTIONARY);
    let b = checker_with(DICTIONARY);
    for query in ["hallo", "mail", "cape"] {
        assert_eq!(a.search(query, 2), b.search(query, 2));
        assert_eq!(a.search(query, 2), a.search(query, 2));
    }
}

#[test]
fn test_search_batch_matches_single_searches() {
    let checker = checker_with(DICTIONARY);
    let queries = ["hallo", "nail", "bok", "cafe"];
    let batch = checker.search_batch(&queries, 2);

    assert_eq!(batch.len(), queries.len());
    for (query, results) in queries.iter().zip(batch) {
        assert_eq!(results, checker.search(query, 2));
    }
}

// =============================================================================
// VERIFICATION
// =============================================================================

#[test]
fn test_verify_reports_shape() {
    let checker = checker_with(DICTIONARY);
    let report = checker.verify().unwrap();

    assert_eq!(report.node_count, DICTIONARY.len());
    assert!(report.depth >= 2);
    assert!(report.leaf_count >= 1);
    assert!(report.distances_checked);
}

#[test]
fn test_extend_words_counts_outcomes() {
    let checker = SpellChecker::new();
    let report = checker.extend_words(["mail", "sail", "", "mail", "rail"]);

    assert_eq!(report.added, 3);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.empty, 1);
    assert_eq!(checker.len(), 3);
}
