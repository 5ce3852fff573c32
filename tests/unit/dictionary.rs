//! Word list loading.

use std::io::{Cursor, Write};

use bkspell::{load_file, load_words, LoadOptions, LoadReport, SpellChecker};
use tempfile::NamedTempFile;

#[test]
fn test_load_file_counts_lines() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "sail\nmail\n\nrail\nmail\n  snape  ").unwrap();

    let checker = SpellChecker::new();
    let report = load_file(file.path(), &checker, LoadOptions::default()).unwrap();

    assert_eq!(
        report,
        LoadReport {
            added: 4,
            duplicates: 1,
            empty: 1,
        }
    );
    assert_eq!(report.total(), 6);
    assert!(checker.contains("snape"));
    assert_eq!(checker.search("nail", 1).len(), 3);
}

#[test]
fn test_load_into_populated_checker() {
    let checker = SpellChecker::new();
    checker.add("mail").unwrap();

    let report = load_words(Cursor::new("mail\nsail\n"), &checker, LoadOptions::default()).unwrap();
    assert_eq!(report.added, 1);
    assert_eq!(report.duplicates, 1);
    assert_eq!(checker.len(), 2);
}

#[test]
fn test_missing_file() {
    let checker = SpellChecker::new();
    let result = load_file("/nonexistent/words.txt", &checker, LoadOptions::default());
    assert!(result.is_err());
    assert!(checker.is_empty());
}

#[test]
fn test_case_is_kept_without_folding() {
    let checker = SpellChecker::new();
    let report = load_words(Cursor::new("Mail\nmail\n"), &checker, LoadOptions::default()).unwrap();
    assert_eq!(report.added, 2);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_folding_merges_variants() {
    let checker = SpellChecker::new();
    let input = "Café\ncafe\nCAFÉ\nNaïve\n";
    let report = load_words(Cursor::new(input), &checker, LoadOptions { fold: true }).unwrap();

    assert_eq!(report.added, 2);
    assert_eq!(report.duplicates, 2);
    assert!(checker.is_folded());
    let mut stored: Vec<_> = checker.snapshot().words().map(str::to_string).collect();
    stored.sort();
    assert_eq!(stored, vec!["cafe", "naive"]);
    assert!(checker.contains("CAFÉ"));
}
