// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary format for bkspell indexes.
//!
//! A BK-tree is cheap to rebuild from a word list but not free: every insert
//! costs a handful of edit-distance computations. For a 500k-word dictionary
//! that adds up, so the built tree can be written out and mapped back in.
//!
//! The stored distances are the whole point. Search correctness hangs on each
//! node's distance from its parent, so they round-trip exactly and are never
//! recomputed on load unless the caller asks (see `SpellChecker::load`).
//!
//! # Security Considerations
//!
//! This format is designed to be safely parsed from untrusted sources:
//! - All size fields are validated against MAX_* constants
//! - Bounds checking prevents buffer overreads
//! - CRC32 footer detects corruption/truncation
//! - Varint decoder has maximum iteration limits
//! - Decoded arenas go through the same structural checks as JSON input
//!
//! # Format Overview (v1)
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER (16 bytes)                                          │
//! │   magic: [u8; 4] = "BKSP"                                  │
//! │   version: u8 = 1                                          │
//! │   flags: u8                                                │
//! │   node_count: u32                                          │
//! │   payload_len: u32                                         │
//! │   reserved: [u8; 2]                                        │
//! ├────────────────────────────────────────────────────────────┤
//! │ NODES (arena order, node 0 = root)                         │
//! │   word_len: varint, word: [u8; word_len]                   │
//! │   distance: varint                                         │
//! │   child_count: varint, children: [varint; child_count]     │
//! ├────────────────────────────────────────────────────────────┤
//! │ FOOTER (8 bytes): crc32 + magic "PSKB"                     │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod encoding;
mod header;

pub use encoding::{decode_node, decode_varint, encode_node, encode_varint};
pub use header::{
    FormatFlags, IndexFooter, IndexHeader, FOOTER_MAGIC, MAGIC, MAX_FILE_SIZE, MAX_NODE_COUNT,
    MAX_VARINT_BYTES, MAX_WORD_BYTES, MIN_NODE_BYTES, VERSION,
};

use std::io;

use crate::tree::BkTree;

/// Whether `bytes` starts like a bkspell index (magic only, nothing validated).
pub fn is_index(bytes: &[u8]) -> bool {
    bytes.starts_with(&MAGIC)
}

/// Encode a tree: header, node records, footer.
///
/// Refuses trees the decoder would refuse: too many nodes, an oversize word,
/// or a file past `MAX_FILE_SIZE`.
pub fn encode_tree(tree: &BkTree, flags: FormatFlags) -> io::Result<Vec<u8>> {
    let mut payload = Vec::new();
    for node in tree.nodes() {
        if node.word().len() > MAX_WORD_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Word of {} bytes exceeds limit {}",
                    node.word().len(),
                    MAX_WORD_BYTES
                ),
            ));
        }
        encode_node(node, &mut payload);
    }

    let header = IndexHeader {
        version: VERSION,
        flags,
        node_count: encodable_node_count(tree.len())?,
        payload_len: encodable_payload_len(payload.len())?,
    };

    let mut out = Vec::with_capacity(header.total_size());
    header.write(&mut out)?;
    out.extend_from_slice(&payload);
    let crc32 = IndexFooter::compute_crc32(&out);
    IndexFooter { crc32 }.write(&mut out)?;

    log::debug!(
        "encoded {} nodes into {} bytes (flags {:#04x})",
        tree.len(),
        out.len(),
        flags.bits()
    );
    Ok(out)
}

fn encodable_node_count(count: usize) -> io::Result<u32> {
    u32::try_from(count)
        .ok()
        .filter(|&n| n <= MAX_NODE_COUNT)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Node count {} exceeds limit {}", count, MAX_NODE_COUNT),
            )
        })
}

fn encodable_payload_len(len: usize) -> io::Result<u32> {
    let total = len.saturating_add(IndexHeader::SIZE + IndexFooter::SIZE);
    if total > MAX_FILE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Index of {} bytes exceeds limit {}", total, MAX_FILE_SIZE),
        ));
    }
    u32::try_from(len).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

/// Decode and structurally validate a tree.
pub fn decode_tree(bytes: &[u8]) -> io::Result<(IndexHeader, BkTree)> {
    if bytes.len() > MAX_FILE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "File size {} exceeds limit {}",
                bytes.len(),
                MAX_FILE_SIZE
            ),
        ));
    }

    let mut reader = bytes;
    let header = IndexHeader::read(&mut reader)?;

    if bytes.len() != header.total_size() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "File is {} bytes but header describes {}",
                bytes.len(),
                header.total_size()
            ),
        ));
    }

    let footer = IndexFooter::read(bytes)?;
    let content = &bytes[..bytes.len() - IndexFooter::SIZE];
    let actual = IndexFooter::compute_crc32(content);
    if actual != footer.crc32 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "CRC32 mismatch: expected {:08x}, got {:08x}",
                footer.crc32, actual
            ),
        ));
    }

    let node_count = header.node_count as usize;
    let payload = &content[IndexHeader::SIZE..];

    // Every record takes at least MIN_NODE_BYTES, so a count larger than the
    // payload allows is a lie; refuse before allocating for it.
    if node_count > payload.len() / MIN_NODE_BYTES {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Node count {} exceeds what {} payload bytes can hold",
                node_count,
                payload.len()
            ),
        ));
    }

    let mut nodes = Vec::with_capacity(node_count);
    let mut pos = 0;
    for _ in 0..node_count {
        nodes.push(decode_node(payload, &mut pos, node_count)?);
    }

    if pos != payload.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} trailing bytes after {} nodes",
                payload.len() - pos,
                node_count
            ),
        ));
    }

    let tree = BkTree::from_nodes(nodes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    log::debug!("decoded {} nodes", tree.len());
    Ok((header, tree))
}
