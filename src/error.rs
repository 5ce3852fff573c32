// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors returned when adding words.
//!
//! Searching never fails, so this is the whole taxonomy: the two ways an
//! insertion can be refused. Both leave the tree exactly as it was.

/// Why a word was not added.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    /// The empty string cannot be stored.
    #[error("cannot add an empty word")]
    EmptyWord,
    /// A stored word is at distance 0 from this one under the active metric.
    #[error("word '{word}' is already present")]
    DuplicateWord { word: String },
}

impl SpellError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, SpellError::DuplicateWord { .. })
    }
}
