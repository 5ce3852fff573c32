// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The spell checker: a BK-tree, the metric it was built with, and a lock.
//!
//! # Locking
//!
//! One `parking_lot::Mutex` covers the tree and its fold setting, and every
//! method holds it for its entire call. Searches serialize against each other
//! as well as against writes, so no caller ever sees a half-linked tree.
//! `search_batch` takes the lock once for many queries and fans them out over
//! rayon when the `parallel` feature is on.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use parking_lot::Mutex;

use crate::binary::{decode_tree, encode_tree, FormatFlags};
use crate::dictionary::LoadReport;
use crate::error::SpellError;
use crate::fuzzy::{DamerauLevenshtein, Metric};
use crate::tree::BkTree;
use crate::types::SearchResult;
use crate::utils::fold;
use crate::verify::{verify_tree, InvariantError, VerificationReport};

/// Thread-safe fuzzy dictionary.
///
/// ```
/// use bkspell::SpellChecker;
///
/// let checker = SpellChecker::new();
/// checker.add("hello").unwrap();
/// checker.add("mellow").unwrap();
///
/// let found = checker.search("helo", 1);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].word, "hello");
/// ```
pub struct SpellChecker<M = DamerauLevenshtein> {
    index: Mutex<Index>,
    metric: M,
}

/// Everything the lock guards.
#[derive(Default)]
struct Index {
    tree: BkTree,
    /// Words and queries go through [`fold`] before reaching the tree.
    folded: bool,
}

impl Index {
    fn key<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if self.folded {
            Cow::Owned(fold(word))
        } else {
            Cow::Borrowed(word)
        }
    }

    fn insert<M: Metric + ?Sized>(&mut self, word: &str, metric: &M) -> Result<(), SpellError> {
        let key = self.key(word);
        self.tree.insert(&key, metric).map(|_| ())
    }

    fn search<M: Metric + ?Sized>(
        &self,
        query: &str,
        tolerance: usize,
        metric: &M,
    ) -> Vec<SearchResult> {
        self.tree.search(&self.key(query), tolerance, metric)
    }

    fn flags(&self) -> FormatFlags {
        if self.folded {
            FormatFlags::new().with_folded()
        } else {
            FormatFlags::new()
        }
    }
}

impl SpellChecker<DamerauLevenshtein> {
    /// An empty checker using true Damerau–Levenshtein distance.
    pub fn new() -> Self {
        Self::with_metric(DamerauLevenshtein)
    }

    /// Decode a binary index built with the default metric.
    pub fn from_bytes(bytes: &[u8]) -> io::Result<Self> {
        Self::from_bytes_with_metric(bytes, DamerauLevenshtein)
    }
}

impl Default for SpellChecker<DamerauLevenshtein> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metric> SpellChecker<M> {
    /// An empty checker using `metric` for every insertion and query.
    ///
    /// See [`Metric`] for what the metric must satisfy. Violations are not
    /// detected; they show up as missed matches.
    pub fn with_metric(metric: M) -> Self {
        Self {
            index: Mutex::new(Index::default()),
            metric,
        }
    }

    /// Wrap an existing tree, checking every stored distance against `metric`.
    pub fn from_tree(tree: BkTree, metric: M) -> Result<Self, InvariantError> {
        verify_tree(&tree, &metric)?;
        Ok(Self {
            index: Mutex::new(Index {
                tree,
                folded: false,
            }),
            metric,
        })
    }

    /// Fold words and queries with [`fold`]: "Café", "CAFE" and "cafe" become
    /// one entry, and any of them finds it.
    ///
    /// Words already stored are not rewritten.
    pub fn folded(mut self) -> Self {
        self.index.get_mut().folded = true;
        self
    }

    /// [`Self::folded`] on a shared checker.
    pub fn enable_folding(&self) {
        self.index.lock().folded = true;
    }

    /// Whether words and queries are folded. Saved indexes record this.
    pub fn is_folded(&self) -> bool {
        self.index.lock().folded
    }

    /// Add one word.
    ///
    /// Fails with [`SpellError::EmptyWord`] for `""` and
    /// [`SpellError::DuplicateWord`] when an equal word (distance 0) is
    /// already stored. Either way the tree is unchanged.
    pub fn add(&self, word: &str) -> Result<(), SpellError> {
        let mut index = self.index.lock();
        index.insert(word, &self.metric)
    }

    /// Every stored word within `tolerance` of `query`.
    ///
    /// Order follows the tree walk and is not sorted; compare as a set or use
    /// [`crate::sort_by_distance`].
    pub fn search(&self, query: &str, tolerance: usize) -> Vec<SearchResult> {
        let index = self.index.lock();
        index.search(query, tolerance, &self.metric)
    }

    /// Whether `word` itself is stored.
    pub fn contains(&self, word: &str) -> bool {
        let index = self.index.lock();
        index.tree.contains(&index.key(word), &self.metric)
    }

    /// Add many words under a single lock, tallying what happened.
    pub fn extend_words<I, S>(&self, words: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = self.index.lock();
        let mut report = LoadReport::default();
        for word in words {
            report.record(&index.insert(word.as_ref(), &self.metric));
        }
        report
    }

    pub fn len(&self) -> usize {
        self.index.lock().tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.lock().tree.is_empty()
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// A copy of the current tree.
    pub fn snapshot(&self) -> BkTree {
        self.index.lock().tree.clone()
    }

    pub fn into_tree(self) -> BkTree {
        self.index.into_inner().tree
    }

    /// Walk the whole tree and confirm its invariants, distances included.
    pub fn verify(&self) -> Result<VerificationReport, InvariantError> {
        let index = self.index.lock();
        verify_tree(&index.tree, &self.metric)
    }

    /// Encode the tree in the binary index format, folding flag included.
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let index = self.index.lock();
        encode_tree(&index.tree, index.flags())
    }

    /// Decode a binary index and adopt it under `metric`.
    ///
    /// Beyond the codec's own checks, every stored distance is recomputed with
    /// `metric`. An index built with a different metric is refused rather than
    /// silently giving wrong answers. A folded index yields a folding checker.
    pub fn from_bytes_with_metric(bytes: &[u8], metric: M) -> io::Result<Self> {
        let (header, tree) = decode_tree(bytes)?;
        let checker = Self::from_tree(tree, metric)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(if header.flags.is_folded() {
            checker.folded()
        } else {
            checker
        })
    }

    /// Write the binary index to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        fs::write(path, &bytes)?;
        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Read a binary index from `path`; see [`Self::from_bytes_with_metric`].
    pub fn load(path: impl AsRef<Path>, metric: M) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let checker = Self::from_bytes_with_metric(&bytes, metric)?;
        log::debug!("loaded {} words from {}", checker.len(), path.display());
        Ok(checker)
    }
}

#[cfg(feature = "parallel")]
impl<M: Metric + Sync> SpellChecker<M> {
    /// Run many queries under one lock, spread across the rayon pool.
    ///
    /// Results come back in query order.
    pub fn search_batch<S>(&self, queries: &[S], tolerance: usize) -> Vec<Vec<SearchResult>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let guard = self.index.lock();
        let index: &Index = &guard;
        let metric = &self.metric;
        queries
            .par_iter()
            .map(|query| index.search(query.as_ref(), tolerance, metric))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl<M: Metric> SpellChecker<M> {
    /// Run many queries under one lock. Results come back in query order.
    pub fn search_batch<S>(&self, queries: &[S], tolerance: usize) -> Vec<Vec<SearchResult>>
    where
        S: AsRef<str>,
    {
        let index = self.index.lock();
        queries
            .iter()
            .map(|query| index.search(query.as_ref(), tolerance, &self.metric))
            .collect()
    }
}

impl<M> fmt::Debug for SpellChecker<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index.lock();
        f.debug_struct("SpellChecker")
            .field("words", &index.tree.len())
            .field("folded", &index.folded)
            .finish_non_exhaustive()
    }
}
