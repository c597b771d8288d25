// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::config::PacketConfig;
use crate::model::PacketAst;

/// Ceiling on the number of row blocks one diagram may produce.
///
/// Bounds worst-case work on adversarial input (e.g. a one-bit-per-row config
/// against a block spanning millions of bits).
pub const MAX_PACKET_ROW_BLOCKS: usize = 10_000;

/// The portion of an authored block that landed within a single row.
///
/// `end` is always resolved here (a single-bit field has `end == start`), and
/// a block split across rows yields one row block per row, each carrying the
/// original label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketRowBlock {
    start: u32,
    end: u32,
    label: String,
}

impl PacketRowBlock {
    /// `end` must not come before `start`; [`layout_packet`] only constructs
    /// row blocks from validated input.
    pub fn new(start: u32, end: u32, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of bits covered, inclusive.
    pub fn bits(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// One rendered row: the row blocks whose bits fall within one
/// `bits_per_row`-wide window.
pub type PacketWord = Vec<PacketRowBlock>;

/// The finished row partition for one diagram render.
///
/// Produced fresh by [`layout_packet`] and owned by the caller, so
/// independent renders cannot contaminate each other and the same input
/// always lays out to an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PacketLayout {
    words: Vec<PacketWord>,
}

impl PacketLayout {
    pub fn words(&self) -> &[PacketWord] {
        &self.words
    }

    pub fn row_block_count(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }

    /// Total number of bits covered by all rows.
    pub fn bit_count(&self) -> u64 {
        self.words
            .iter()
            .flatten()
            .map(|block| u64::from(block.bits()))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacketLayoutError {
    InvalidBlockRange {
        start: u32,
        end: u32,
        label: String,
    },
    NonContiguousBlock {
        expected_start: u64,
        found_start: u32,
        label: String,
    },
    ZeroBitsPerRow,
    TooManyRowBlocks {
        limit: usize,
    },
}

impl fmt::Display for PacketLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBlockRange { start, end, label } => write!(
                f,
                "packet block {start}-{end} ({label:?}) is invalid: end must not come before start"
            ),
            Self::NonContiguousBlock {
                expected_start,
                found_start,
                label,
            } => write!(
                f,
                "packet block at bit {found_start} ({label:?}) is not contiguous: expected it to start at bit {expected_start}"
            ),
            Self::ZeroBitsPerRow => f.write_str("bits_per_row must be greater than zero"),
            Self::TooManyRowBlocks { limit } => write!(
                f,
                "packet diagram is too large: would emit more than {limit} row blocks"
            ),
        }
    }
}

impl std::error::Error for PacketLayoutError {}

/// Splits `block` against the row window ending at
/// `row_index * bits_per_row - 1`.
///
/// Returns the portion that fits in the current row and, when the block
/// overflows, the remainder for the next row. The label is duplicated onto
/// both parts so every row a field spans still shows its name.
fn split_at_row_boundary(
    block: PacketRowBlock,
    row_index: u32,
    bits_per_row: u32,
) -> (PacketRowBlock, Option<PacketRowBlock>) {
    // Inclusive index of the last bit that still fits in this row.
    let limit = u64::from(row_index) * u64::from(bits_per_row) - 1;
    if u64::from(block.end) <= limit {
        return (block, None);
    }

    let fitting = PacketRowBlock::new(block.start, limit as u32, block.label.clone());
    let remainder = PacketRowBlock::new(limit as u32 + 1, block.end, block.label);
    (fitting, Some(remainder))
}

/// Lays out `ast`'s blocks into `config.bits_per_row`-wide rows.
///
/// Blocks must be strictly contiguous: the first block starts at bit 0 and
/// each subsequent block starts right after the previous one ends. A block
/// whose range crosses a row boundary is emitted as one row block per row.
/// Rows close exactly when a row block reaches the row boundary; a partial
/// final row is flushed so a packet whose bit length is not a multiple of
/// `bits_per_row` keeps its last row.
pub fn layout_packet(
    ast: &PacketAst,
    config: &PacketConfig,
) -> Result<PacketLayout, PacketLayoutError> {
    let bits_per_row = config.bits_per_row;
    if bits_per_row == 0 {
        return Err(PacketLayoutError::ZeroBitsPerRow);
    }

    let mut words = Vec::<PacketWord>::new();
    let mut current_row = PacketWord::new();
    let mut row_index: u32 = 1;
    let mut expected_next_start: u64 = 0;
    let mut emitted: usize = 0;

    for block in ast.blocks() {
        let start = block.start();
        let end = block.end().unwrap_or(start);
        if end < start {
            return Err(PacketLayoutError::InvalidBlockRange {
                start,
                end,
                label: block.label().to_owned(),
            });
        }
        if u64::from(start) != expected_next_start {
            return Err(PacketLayoutError::NonContiguousBlock {
                expected_start: expected_next_start,
                found_start: start,
                label: block.label().to_owned(),
            });
        }

        let mut remaining = PacketRowBlock::new(start, end, block.label().to_owned());
        // A row holds at most `bits_per_row` one-bit blocks; the extra slot
        // keeps the guard from ever clipping a legitimate row.
        while current_row.len() <= bits_per_row as usize + 1 {
            if emitted == MAX_PACKET_ROW_BLOCKS {
                return Err(PacketLayoutError::TooManyRowBlocks {
                    limit: MAX_PACKET_ROW_BLOCKS,
                });
            }

            let (fitting, rest) = split_at_row_boundary(remaining, row_index, bits_per_row);
            let closes_row = u64::from(fitting.end()) + 1
                == u64::from(row_index) * u64::from(bits_per_row);
            emitted += 1;
            current_row.push(fitting);
            if closes_row {
                words.push(std::mem::take(&mut current_row));
                row_index += 1;
            }

            match rest {
                Some(rest) => remaining = rest,
                None => break,
            }
        }

        expected_next_start = u64::from(end) + 1;
    }

    // The last row of a packet whose bit length is not a multiple of
    // `bits_per_row` is flushed even though it is not row-aligned.
    if !current_row.is_empty() {
        words.push(current_row);
    }

    Ok(PacketLayout { words })
}
