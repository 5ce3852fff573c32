// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the index decoder.
//!
//! Index files may come from anywhere. The decoder must return Err on
//! garbage, never panic or allocate without bound, and anything it accepts
//! must be a tree the rest of the crate can safely walk.

#![no_main]

use bkspell::binary::{decode_tree, encode_tree};
use bkspell::{check_structure, DamerauLevenshtein};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok((header, tree)) = decode_tree(data) else {
        return;
    };

    assert!(check_structure(tree.nodes()).is_ok());
    assert_eq!(header.node_count as usize, tree.len());

    // Reserved bytes and padded varints are tolerated on input, so compare
    // trees rather than bytes.
    let bytes = encode_tree(&tree, header.flags).expect("decoded tree re-encodes");
    let (_, again) = decode_tree(&bytes).expect("re-encoded tree decodes");
    assert_eq!(again, tree);

    // Stored distances may be lies, but walking the tree must still be safe.
    let _ = tree.search("fuzz", 2, &DamerauLevenshtein);
});
