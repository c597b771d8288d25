// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::{PacketLayout, PacketRowBlock, PacketWord};
use crate::model::PacketAst;

use super::{Grid, GridError};

/// Options for the Unicode backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderOptions {
    /// Character columns per bit; a block spanning `n` bits is
    /// `n * cell_width` columns wide plus shared borders.
    pub cell_width: usize,
    /// Whether start/end bit indices are drawn above each row.
    pub show_bits: bool,
}

impl Default for TextRenderOptions {
    fn default() -> Self {
        Self {
            cell_width: 4,
            show_bits: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacketRenderError {
    ZeroCellWidth,
    Grid(GridError),
}

impl fmt::Display for PacketRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCellWidth => f.write_str("cell_width must be greater than zero"),
            Self::Grid(err) => write!(f, "grid error: {err}"),
        }
    }
}

impl std::error::Error for PacketRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ZeroCellWidth => None,
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<GridError> for PacketRenderError {
    fn from(value: GridError) -> Self {
        Self::Grid(value)
    }
}

fn word_bits(word: &PacketWord) -> usize {
    word.iter().map(|block| block.bits() as usize).sum()
}

fn write_block_label(
    grid: &mut Grid,
    block: &PacketRowBlock,
    x0: usize,
    x1: usize,
    y: usize,
) -> Result<(), GridError> {
    let inner = x1 - x0 - 1;
    if inner == 0 {
        return Ok(());
    }

    let label = block.label().chars().take(inner).collect::<String>();
    if label.is_empty() {
        return Ok(());
    }

    let len = label.chars().count();
    grid.write_str(x0 + 1 + (inner - len) / 2, y, &label)
}

fn write_bit_indices(
    grid: &mut Grid,
    block: &PacketRowBlock,
    x0: usize,
    x1: usize,
    y: usize,
) -> Result<(), GridError> {
    let mut buffer = itoa::Buffer::new();

    grid.write_str(x0 + 1, y, buffer.format(block.start()))?;

    if block.bits() > 1 {
        let end = buffer.format(block.end());
        // Right-aligned inside the block; may clip against the start index
        // on very narrow blocks (last writer wins, deterministically).
        let x = x1.saturating_sub(end.chars().count());
        grid.write_str(x.max(x0 + 1), y, end)?;
    }

    Ok(())
}

pub fn render_packet_unicode(
    ast: &PacketAst,
    layout: &PacketLayout,
) -> Result<String, PacketRenderError> {
    render_packet_unicode_with_options(ast, layout, TextRenderOptions::default())
}

/// Renders the laid-out rows as Unicode box-drawing text.
///
/// Every row starts at the left edge; adjacent blocks share border columns
/// and adjacent rows share border lines (when bit indices are off), merging
/// into `├`/`┬`/`┼` junctions. Labels are centered and clipped to their
/// block; the title, when present, becomes the first line.
pub fn render_packet_unicode_with_options(
    ast: &PacketAst,
    layout: &PacketLayout,
    options: TextRenderOptions,
) -> Result<String, PacketRenderError> {
    if options.cell_width == 0 {
        return Err(PacketRenderError::ZeroCellWidth);
    }

    let words = layout.words();
    let title = ast.title().filter(|title| !title.is_empty());
    if words.is_empty() && title.is_none() {
        return Ok(String::new());
    }

    let max_bits = words.iter().map(word_bits).max().unwrap_or(0);
    let boxes_width = if max_bits == 0 {
        0
    } else {
        max_bits * options.cell_width + 1
    };
    let title_len = title.map(|title| title.chars().count()).unwrap_or(0);
    let width = boxes_width.max(title_len);

    let title_rows = usize::from(title.is_some());
    let height = title_rows
        + if words.is_empty() {
            0
        } else if options.show_bits {
            words.len() * 4
        } else {
            words.len() * 2 + 1
        };

    let mut grid = Grid::new(width, height)?;

    if let Some(title) = title {
        grid.write_str(0, 0, title)?;
    }

    for (row, word) in words.iter().enumerate() {
        let Some(first) = word.first() else {
            continue;
        };
        let base = first.start();

        let y_top = title_rows
            + if options.show_bits {
                row * 4 + 1
            } else {
                row * 2
            };

        for block in word {
            let x0 = (block.start() - base) as usize * options.cell_width;
            let x1 = (block.end() - base + 1) as usize * options.cell_width;

            grid.draw_box(x0, y_top, x1, y_top + 2)?;
            write_block_label(&mut grid, block, x0, x1, y_top + 1)?;
            if options.show_bits {
                write_bit_indices(&mut grid, block, x0, x1, y_top - 1)?;
            }
        }
    }

    Ok(grid.to_string())
}
