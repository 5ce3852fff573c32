//! Spell checking and fuzzy lookup over a BK-tree.
//!
//! Give it a dictionary, ask it for every word within `k` edits of a
//! misspelling. The index is a BK-tree (Burkhard–Keller metric tree); the
//! default distance is true Damerau–Levenshtein, so a swapped pair of letters
//! counts as one edit.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  fuzzy/     │────▶│   tree.rs    │────▶│   checker.rs    │
//! │ (Metric,    │     │ (BkTree:     │     │ (SpellChecker:  │
//! │  distances) │     │ insert/search│     │  lock + metric) │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//!                            │                     │
//!                            ▼                     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  verify/ (structure + distance checks, debug contracts)     │
//! │  binary/ (index file codec)   dictionary.rs (word lists)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bkspell::SpellChecker;
//!
//! let checker = SpellChecker::new();
//! for word in ["sail", "mail", "rail", "snape"] {
//!     checker.add(word).unwrap();
//! }
//!
//! let mut found: Vec<_> = checker.search("nail", 1).into_iter().map(|r| r.word).collect();
//! found.sort();
//! assert_eq!(found, ["mail", "rail", "sail"]);
//! ```
//!
//! Custom distances plug in through [`Metric`], including plain closures. The
//! tree's pruning assumes the metric obeys the triangle inequality; one that
//! doesn't will still build, but searches can miss matches.

// Module declarations
pub mod binary;
mod checker;
pub mod dictionary;
mod error;
mod fuzzy;
pub mod testing;
mod tree;
mod types;
mod utils;
pub mod verify;

// Re-exports for public API
pub use checker::SpellChecker;
pub use dictionary::{load_file, load_words, LoadOptions, LoadReport};
pub use error::SpellError;
pub use fuzzy::{damerau_levenshtein, levenshtein, DamerauLevenshtein, Levenshtein, Metric};
pub use tree::BkTree;
pub use types::{sort_by_distance, Node, NodeId, SearchResult};
pub use utils::fold;
pub use verify::{check_structure, verify_tree, InvariantError, VerificationReport};
