//! Saving, loading and rejecting index files.

use std::io::ErrorKind;

use crate::common::{checker_with, DICTIONARY};
use bkspell::binary::{decode_tree, encode_tree, FormatFlags};
use bkspell::{
    BkTree, DamerauLevenshtein, InvariantError, Levenshtein, Node, NodeId, SearchResult,
    SpellChecker,
};
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.bksp");

    let checker = checker_with(DICTIONARY);
    checker.save(&path).unwrap();

    let loaded = SpellChecker::load(&path, DamerauLevenshtein).unwrap();
    assert_eq!(loaded.snapshot(), checker.snapshot());
    for query in ["hallo", "nail", "recieve"] {
        assert_eq!(loaded.search(query, 2), checker.search(query, 2));
    }
}

#[test]
fn test_loaded_checker_accepts_new_words() {
    let checker = checker_with(DICTIONARY);
    let loaded = SpellChecker::from_bytes(&checker.to_bytes().unwrap()).unwrap();

    loaded.add("zebra").unwrap();
    assert!(loaded.add("hello").unwrap_err().is_duplicate());
    assert_eq!(loaded.len(), DICTIONARY.len() + 1);
    loaded.verify().unwrap();
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = SpellChecker::load(dir.path().join("absent.bksp"), DamerauLevenshtein).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_wrong_metric_is_refused() {
    // "teh" sits one transposition from "the"; Levenshtein calls that 2.
    let checker = checker_with(&["the", "teh"]);
    let bytes = checker.to_bytes().unwrap();
    let err = SpellChecker::from_bytes_with_metric(&bytes, Levenshtein).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn test_flipped_byte_is_detected() {
    let mut bytes = checker_with(DICTIONARY).to_bytes().unwrap();
    let middle = bytes.len() / 2;
    bytes[middle] ^= 0x20;

    let err = SpellChecker::from_bytes(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn test_truncated_file_is_detected() {
    let bytes = checker_with(DICTIONARY).to_bytes().unwrap();
    for len in [0, 3, 15, bytes.len() / 2, bytes.len() - 1] {
        assert!(
            SpellChecker::from_bytes(&bytes[..len]).is_err(),
            "accepted {} of {} bytes",
            len,
            bytes.len()
        );
    }
}

#[test]
fn test_not_an_index() {
    assert!(SpellChecker::from_bytes(b"hello\nmellow\nyellow\n").is_err());
}

#[test]
fn test_root_listed_as_child_is_refused() {
    let nodes = vec![
        Node::from_parts("mail", 0, vec![NodeId::from(1)]),
        Node::from_parts("sail", 1, vec![NodeId::from(0)]),
    ];
    assert!(matches!(
        BkTree::from_nodes(nodes),
        Err(InvariantError::RootHasParent { parent: 1 })
    ));
}

#[test]
fn test_empty_json_tree() {
    let tree: BkTree = serde_json::from_str(r#"{"nodes":[]}"#).unwrap();
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
}

#[test]
fn test_folded_flag_survives() {
    let tree = checker_with(&["cafe", "naive"]).into_tree();
    let bytes = encode_tree(&tree, FormatFlags::new().with_folded()).unwrap();
    let (header, back) = decode_tree(&bytes).unwrap();

    assert!(header.flags.is_folded());
    assert_eq!(back, tree);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_folding_checker_reloads_folding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("folded.bksp");

    let checker = SpellChecker::new().folded();
    checker.extend_words(["Café", "Naïve"]);
    checker.save(&path).unwrap();

    let loaded = SpellChecker::load(&path, DamerauLevenshtein).unwrap();
    assert!(loaded.is_folded());
    assert_eq!(loaded.search("Café", 0), vec![SearchResult::new("cafe", 0)]);
    assert_eq!(loaded.search("NAIVE", 0), vec![SearchResult::new("naive", 0)]);

    let (header, _) = decode_tree(&checker.to_bytes().unwrap()).unwrap();
    assert!(header.flags.is_folded());
}

#[test]
fn test_json_round_trip() {
    let tree = checker_with(DICTIONARY).into_tree();
    let json = serde_json::to_string(&tree).unwrap();
    let back: BkTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);

    let checker = SpellChecker::from_tree(back, DamerauLevenshtein).unwrap();
    assert_eq!(checker.len(), DICTIONARY.len());
}

#[test]
fn test_json_with_orphan_is_rejected() {
    let json = r#"{"nodes":[
        {"word":"mail","distance":0,"children":[]},
        {"word":"sail","distance":1,"children":[]}
    ]}"#;
    assert!(serde_json::from_str::<BkTree>(json).is_err());
}
