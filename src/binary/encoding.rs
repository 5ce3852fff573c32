// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary encoding primitives: varints and node records.
//!
//! Nothing fancy here. Distances and child counts are tiny, so LEB128 varints
//! keep most of them to one byte. Words are length-prefixed UTF-8.
//!
//! # References
//!
//! - **Varint (LEB128)**: Little-endian base-128 variable-length integer encoding.
//!   See Google Protocol Buffers encoding: <https://protobuf.dev/programming-guides/encoding/>

use std::io;

use super::header::{MAX_VARINT_BYTES, MAX_WORD_BYTES};
use crate::types::{Node, NodeId};

// ============================================================================
// VARINT ENCODING
// ============================================================================

/// Encode a varint to bytes
pub fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        } else {
            buf.push(byte | 0x80);
        }
    }
}

/// Decode a varint from bytes, returning (value, bytes_consumed)
///
/// Returns an error if:
/// - Buffer is empty
/// - Varint exceeds MAX_VARINT_BYTES (malformed/malicious input)
pub fn decode_varint(bytes: &[u8]) -> io::Result<(u64, usize)> {
    if bytes.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Empty buffer for varint",
        ));
    }

    let mut result: u64 = 0;
    let mut shift = 0;
    let mut i = 0;

    while i < bytes.len() && i < MAX_VARINT_BYTES {
        let byte = bytes[i];
        result |= ((byte & 0x7F) as u64) << shift;
        i += 1;
        if byte & 0x80 == 0 {
            return Ok((result, i));
        }
        shift += 7;
    }

    if i >= MAX_VARINT_BYTES {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Varint exceeds maximum length (possible corruption)",
        ))
    } else {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Incomplete varint",
        ))
    }
}

/// Read a varint that must fit in `usize` and not exceed `limit`.
fn decode_bounded(bytes: &[u8], pos: &mut usize, limit: usize, what: &str) -> io::Result<usize> {
    let rest = bytes.get(*pos..).unwrap_or_default();
    let (value, consumed) = decode_varint(rest)?;
    *pos += consumed;
    usize::try_from(value)
        .ok()
        .filter(|&v| v <= limit)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} {} exceeds limit {}", what, value, limit),
            )
        })
}

// ============================================================================
// NODE RECORDS
// ============================================================================

/// Append one node: word length, word bytes, distance, child count, child ids.
pub fn encode_node(node: &Node, buf: &mut Vec<u8>) {
    let word = node.word().as_bytes();
    encode_varint(word.len() as u64, buf);
    buf.extend_from_slice(word);
    encode_varint(node.distance() as u64, buf);
    encode_varint(node.children().len() as u64, buf);
    for child in node.children() {
        encode_varint(child.index() as u64, buf);
    }
}

/// Decode one node starting at `*pos`, advancing it past the record.
///
/// `node_count` bounds the child count and the child ids. Ids are only checked
/// against the arena size here; tree shape is checked once all nodes are read.
pub fn decode_node(bytes: &[u8], pos: &mut usize, node_count: usize) -> io::Result<Node> {
    let start = *pos;

    let word_len = decode_bounded(bytes, pos, MAX_WORD_BYTES, "Word length")?;
    let end = pos.checked_add(word_len).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Word length {} causes overflow", word_len),
        )
    })?;
    let word_bytes = bytes.get(*pos..end).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("Truncated word in node record at byte {}", start),
        )
    })?;
    let word = std::str::from_utf8(word_bytes)
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid UTF-8 in word at byte {}: {}", start, e),
            )
        })?
        .to_string();
    *pos = end;

    let distance = decode_bounded(bytes, pos, usize::MAX, "Distance")?;
    let child_count = decode_bounded(bytes, pos, node_count, "Child count")?;

    let mut children = Vec::with_capacity(child_count);
    for _ in 0..child_count {
        let child = decode_bounded(bytes, pos, node_count.saturating_sub(1), "Child id")?;
        children.push(NodeId::from(child));
    }

    Ok(Node::from_parts(word, distance, children))
}
