// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use memchr::memchr;

use crate::model::{PacketAst, PacketBlock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MermaidPacketParseError {
    MissingHeader,
    UnsupportedSyntax {
        line_no: usize,
        line: String,
    },
    InvalidBlockLine {
        line_no: usize,
        line: String,
    },
    InvalidBitIndex {
        line_no: usize,
        raw: String,
    },
    InvalidBitCount {
        line_no: usize,
        raw: String,
    },
    MissingBlockLabel {
        line_no: usize,
        line: String,
    },
    UnterminatedLabel {
        line_no: usize,
        line: String,
    },
}

impl fmt::Display for MermaidPacketParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => {
                f.write_str("expected 'packet-beta' (or 'packet') as the first non-empty line")
            }
            Self::UnsupportedSyntax { line_no, line } => {
                write!(f, "unsupported Mermaid syntax on line {line_no}: {line}")
            }
            Self::InvalidBlockLine { line_no, line } => write!(
                f,
                "invalid packet row on line {line_no}: {line} (expected '<start>[-<end>]: \"<label>\"')"
            ),
            Self::InvalidBitIndex { line_no, raw } => {
                write!(f, "invalid bit index on line {line_no}: {raw}")
            }
            Self::InvalidBitCount { line_no, raw } => write!(
                f,
                "invalid bit count on line {line_no}: {raw} (expected a positive number of bits)"
            ),
            Self::MissingBlockLabel { line_no, line } => {
                write!(f, "missing block label on line {line_no}: {line}")
            }
            Self::UnterminatedLabel { line_no, line } => {
                write!(f, "unterminated block label on line {line_no}: {line}")
            }
        }
    }
}

impl std::error::Error for MermaidPacketParseError {}

fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("%%")
}

fn keyword_header(trimmed: &str, keyword: &str) -> Option<String> {
    let rest = trimmed.get(keyword.len()..).unwrap_or_default().trim();
    (!rest.is_empty()).then(|| rest.to_owned())
}

fn parse_bit_index(raw: &str, line_no: usize) -> Result<u32, MermaidPacketParseError> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .map_err(|_| MermaidPacketParseError::InvalidBitIndex {
            line_no,
            raw: raw.to_owned(),
        })
}

/// Parses the quoted label after the `:` of a row line.
fn parse_label(
    raw: &str,
    line_no: usize,
    line: &str,
) -> Result<String, MermaidPacketParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MermaidPacketParseError::MissingBlockLabel {
            line_no,
            line: line.to_owned(),
        });
    }

    let Some(rest) = raw.strip_prefix('"') else {
        return Err(MermaidPacketParseError::InvalidBlockLine {
            line_no,
            line: line.to_owned(),
        });
    };

    let Some(quote) = memchr(b'"', rest.as_bytes()) else {
        return Err(MermaidPacketParseError::UnterminatedLabel {
            line_no,
            line: line.to_owned(),
        });
    };

    let label = &rest[..quote];
    if label.is_empty() {
        return Err(MermaidPacketParseError::MissingBlockLabel {
            line_no,
            line: line.to_owned(),
        });
    }

    if !rest[quote + 1..].trim().is_empty() {
        return Err(MermaidPacketParseError::InvalidBlockLine {
            line_no,
            line: line.to_owned(),
        });
    }

    Ok(label.to_owned())
}

/// Parse a deliberately limited `packet` Mermaid subset.
///
/// Supported lines (after a `packet-beta` or `packet` header):
/// - `<start>: "<label>"` (single bit)
/// - `<start>-<end>: "<label>"` (inclusive bit range)
/// - `+<count>: "<label>"` (`count` bits starting at the next free bit;
///   resolved to absolute indices while parsing)
/// - `title <text>`
/// - `accTitle: <text>` / `accDescr: <text>`
/// - `%%` comment lines and blank lines are skipped
///
/// All other Mermaid syntax is rejected with an actionable error. Range
/// validation (contiguity, inverted ranges) is the layout driver's job, so a
/// parsed AST is not necessarily layoutable.
pub fn parse_packet_diagram(input: &str) -> Result<PacketAst, MermaidPacketParseError> {
    let mut ast = PacketAst::default();

    let mut saw_header = false;
    // Next free bit for `+<count>` rows; absolute rows advance it too.
    let mut next_free: u64 = 0;
    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || is_comment_line(trimmed) {
            continue;
        }

        if !saw_header {
            if trimmed == "packet-beta" || trimmed == "packet" {
                saw_header = true;
                continue;
            }
            return Err(MermaidPacketParseError::MissingHeader);
        }

        if trimmed == "title" || trimmed.starts_with("title ") {
            ast.set_title(keyword_header(trimmed, "title"));
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("accTitle:") {
            let rest = rest.trim();
            ast.set_acc_title((!rest.is_empty()).then(|| rest.to_owned()));
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("accDescr:") {
            let rest = rest.trim();
            ast.set_acc_descr((!rest.is_empty()).then(|| rest.to_owned()));
            continue;
        }
        if trimmed.starts_with("accTitle") || trimmed.starts_with("accDescr") {
            // Covers the multiline `accDescr { ... }` form, which is not supported.
            return Err(MermaidPacketParseError::UnsupportedSyntax {
                line_no,
                line: trimmed.to_owned(),
            });
        }

        // Everything else must be a block row: `<range>: "<label>"`.
        let Some(colon) = memchr(b':', trimmed.as_bytes()) else {
            return Err(MermaidPacketParseError::UnsupportedSyntax {
                line_no,
                line: trimmed.to_owned(),
            });
        };
        let range_raw = trimmed[..colon].trim();
        let label_raw = &trimmed[colon + 1..];
        if range_raw.is_empty() {
            return Err(MermaidPacketParseError::InvalidBlockLine {
                line_no,
                line: trimmed.to_owned(),
            });
        }

        let block = if let Some(count_raw) = range_raw.strip_prefix('+') {
            let count = count_raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|count| *count > 0)
                .ok_or_else(|| MermaidPacketParseError::InvalidBitCount {
                    line_no,
                    raw: range_raw.to_owned(),
                })?;
            let start = next_free;
            let end = start
                .checked_add(count - 1)
                .filter(|end| *end <= u64::from(u32::MAX))
                .ok_or_else(|| MermaidPacketParseError::InvalidBitCount {
                    line_no,
                    raw: range_raw.to_owned(),
                })?;
            let label = parse_label(label_raw, line_no, trimmed)?;
            if count == 1 {
                PacketBlock::single(start as u32, label)
            } else {
                PacketBlock::range(start as u32, end as u32, label)
            }
        } else if let Some((start_raw, end_raw)) = range_raw.split_once('-') {
            let start = parse_bit_index(start_raw, line_no)?;
            let end = parse_bit_index(end_raw, line_no)?;
            let label = parse_label(label_raw, line_no, trimmed)?;
            PacketBlock::range(start, end, label)
        } else {
            let start = parse_bit_index(range_raw, line_no)?;
            let label = parse_label(label_raw, line_no, trimmed)?;
            PacketBlock::single(start, label)
        };

        next_free = u64::from(block.end().unwrap_or(block.start())) + 1;
        ast.blocks_mut().push(block);
    }

    if !saw_header {
        return Err(MermaidPacketParseError::MissingHeader);
    }

    Ok(ast)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MermaidPacketExportError {
    InvalidLabel {
        start: u32,
        end: u32,
        label: String,
    },
    InvalidMetadataText {
        field: &'static str,
        text: String,
    },
}

impl fmt::Display for MermaidPacketExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLabel { start, end, label } => write!(
                f,
                "cannot export block {start}-{end}: label contains unsupported characters: {label:?}"
            ),
            Self::InvalidMetadataText { field, text } => {
                write!(f, "cannot export {field}: contains line breaks: {text:?}")
            }
        }
    }
}

impl std::error::Error for MermaidPacketExportError {}

fn validate_export_line_text(text: &str) -> bool {
    !text.contains('\n') && !text.contains('\r')
}

fn push_metadata_line(
    out: &mut String,
    prefix: &str,
    field: &'static str,
    text: Option<&str>,
) -> Result<(), MermaidPacketExportError> {
    let Some(text) = text else {
        return Ok(());
    };

    if !validate_export_line_text(text) {
        return Err(MermaidPacketExportError::InvalidMetadataText {
            field,
            text: text.to_owned(),
        });
    }

    out.push_str(prefix);
    out.push_str(text);
    out.push('\n');
    Ok(())
}

/// Export a packet diagram to canonical Mermaid `.mmd`.
///
/// Export is stable/deterministic: the header is always `packet-beta`, rows
/// use absolute indices (relative `+<count>` rows were resolved at parse
/// time), and single-bit rows collapse to one index.
pub fn export_packet_diagram(ast: &PacketAst) -> Result<String, MermaidPacketExportError> {
    let mut out = String::new();
    out.push_str("packet-beta\n");

    push_metadata_line(&mut out, "title ", "title", ast.title())?;
    push_metadata_line(&mut out, "accTitle: ", "accTitle", ast.acc_title())?;
    push_metadata_line(&mut out, "accDescr: ", "accDescr", ast.acc_descr())?;

    let mut buffer = itoa::Buffer::new();
    for block in ast.blocks() {
        let start = block.start();
        let end = block.end().unwrap_or(start);
        if block.label().contains('"') || !validate_export_line_text(block.label()) {
            return Err(MermaidPacketExportError::InvalidLabel {
                start,
                end,
                label: block.label().to_owned(),
            });
        }

        out.push_str(buffer.format(start));
        if end != start {
            out.push('-');
            out.push_str(buffer.format(end));
        }
        out.push_str(": \"");
        out.push_str(block.label());
        out.push_str("\"\n");
    }

    Ok(out)
}
