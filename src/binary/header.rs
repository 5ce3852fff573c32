// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary format header and footer structures.
//!
//! The header is 16 bytes of fixed-size fields, parsed in one read before
//! anything else. It says how many nodes follow and how many payload bytes they
//! take, so a truncated or padded file is caught before decoding a single node.
//!
//! The footer is 8 bytes: a CRC32 checksum over everything before it, plus a
//! magic number ("PSKB", the header magic reversed). If the footer is wrong,
//! something got corrupted or truncated. Don't trust the data.

use std::io::{self, Read, Write};

use crc32fast::Hasher as Crc32Hasher;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Magic bytes: "BKSP" in ASCII (header)
pub const MAGIC: [u8; 4] = [0x42, 0x4B, 0x53, 0x50];

/// Footer magic: "PSKB" (reversed, marks valid file end)
pub const FOOTER_MAGIC: [u8; 4] = [0x50, 0x53, 0x4B, 0x42];

/// Current format version
pub const VERSION: u8 = 1;

// ============================================================================
// SECURITY LIMITS (prevent resource exhaustion from malicious input)
// ============================================================================

/// Maximum file size: 512 MB
pub const MAX_FILE_SIZE: usize = 512 * 1024 * 1024;

/// Maximum number of nodes (words)
pub const MAX_NODE_COUNT: u32 = 50_000_000;

/// Maximum encoded length of one word
pub const MAX_WORD_BYTES: usize = 64 * 1024;

/// Maximum varint bytes (u64 needs at most 10 bytes)
pub const MAX_VARINT_BYTES: usize = 10;

/// Smallest possible node record: 1-byte length, 1+ byte word, distance, child count.
pub const MIN_NODE_BYTES: usize = 4;

// ============================================================================
// FLAGS
// ============================================================================

/// Format flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags(pub(crate) u8);

impl FormatFlags {
    /// Words were case- and diacritic-folded before insertion; fold queries too.
    pub const FOLDED: u8 = 0b0000_0001;

    pub fn new() -> Self {
        Self(0)
    }

    pub fn with_folded(mut self) -> Self {
        self.0 |= Self::FOLDED;
        self
    }

    pub fn is_folded(self) -> bool {
        self.0 & Self::FOLDED != 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

// ============================================================================
// HEADER (16 bytes)
// ============================================================================

/// Binary format header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexHeader {
    pub version: u8,
    pub flags: FormatFlags,
    pub node_count: u32,
    /// Bytes of node records between header and footer
    pub payload_len: u32,
}

impl IndexHeader {
    // 4 (magic) + 1 (version) + 1 (flags) + 2*4 (u32s) + 2 (reserved) = 16
    pub const SIZE: usize = 16;

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&[self.version])?;
        w.write_all(&[self.flags.0])?;
        w.write_all(&self.node_count.to_le_bytes())?;
        w.write_all(&self.payload_len.to_le_bytes())?;
        w.write_all(&[0u8; 2])?; // reserved
        Ok(())
    }

    pub fn read<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 4];
        r.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid magic: expected BKSP, got {:?}", magic),
            ));
        }

        let mut buf = [0u8; 12]; // 16 - 4 (magic) = 12
        r.read_exact(&mut buf)?;

        let header = Self {
            version: buf[0],
            flags: FormatFlags(buf[1]),
            node_count: u32::from_le_bytes([buf[2], buf[3], buf[4], buf[5]]),
            payload_len: u32::from_le_bytes([buf[6], buf[7], buf[8], buf[9]]),
            // buf[10..12] is reserved
        };

        if header.version != VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Unsupported version {} (expected {})",
                    header.version, VERSION
                ),
            ));
        }
        if header.node_count > MAX_NODE_COUNT {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Node count {} exceeds limit {}",
                    header.node_count, MAX_NODE_COUNT
                ),
            ));
        }

        Ok(header)
    }

    /// Total file size this header implies
    pub fn total_size(&self) -> usize {
        Self::SIZE + self.payload_len as usize + IndexFooter::SIZE
    }
}

// ============================================================================
// FOOTER (8 bytes)
// ============================================================================

/// Footer with CRC32 checksum and magic number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFooter {
    /// CRC32 checksum of header + payload (everything before footer)
    pub crc32: u32,
}

impl IndexFooter {
    pub const SIZE: usize = 8; // 4 bytes CRC32 + 4 bytes magic

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&FOOTER_MAGIC)?;
        Ok(())
    }

    pub fn read(bytes: &[u8]) -> io::Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "File too short for footer",
            ));
        }

        let footer_start = bytes.len() - Self::SIZE;

        let magic = &bytes[footer_start + 4..];
        if magic != FOOTER_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid footer magic: expected PSKB, got {:?}", magic),
            ));
        }

        let crc32 = u32::from_le_bytes([
            bytes[footer_start],
            bytes[footer_start + 1],
            bytes[footer_start + 2],
            bytes[footer_start + 3],
        ]);

        Ok(Self { crc32 })
    }

    /// Compute CRC32 over the given bytes
    pub fn compute_crc32(data: &[u8]) -> u32 {
        let mut hasher = Crc32Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}
