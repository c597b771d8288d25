// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::config::PacketConfig;
use crate::layout::{PacketLayout, PacketRowBlock};
use crate::model::PacketAst;

/// Vertical space reserved above the first row when a title is present.
const TITLE_BLOCK_HEIGHT: u64 = 24;
/// Gap between a bit-index baseline and the top edge of its rectangle.
const BIT_INDEX_RISE: u64 = 2;

/// Style options for the emitted `<style>` sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketStyle {
    pub byte_font_size: String,
    pub start_byte_color: String,
    pub end_byte_color: String,
    pub label_color: String,
    pub label_font_size: String,
    pub title_color: String,
    pub title_font_size: String,
    pub block_stroke_color: String,
    pub block_stroke_width: String,
    pub block_fill_color: String,
}

impl Default for PacketStyle {
    fn default() -> Self {
        Self {
            byte_font_size: "10px".to_owned(),
            start_byte_color: "black".to_owned(),
            end_byte_color: "black".to_owned(),
            label_color: "black".to_owned(),
            label_font_size: "12px".to_owned(),
            title_color: "black".to_owned(),
            title_font_size: "14px".to_owned(),
            block_stroke_color: "black".to_owned(),
            block_stroke_width: "1".to_owned(),
            block_fill_color: "#efefef".to_owned(),
        }
    }
}

/// The fixed stylesheet template, parameterized by `style`.
pub fn packet_styles(style: &PacketStyle) -> String {
    format!(
        ".packetByte {{ font-size: {byte_font_size}; }}
.packetByte.start {{ fill: {start_byte_color}; }}
.packetByte.end {{ fill: {end_byte_color}; }}
.packetLabel {{ fill: {label_color}; font-size: {label_font_size}; }}
.packetTitle {{ fill: {title_color}; font-size: {title_font_size}; }}
.packetBlock {{ stroke: {block_stroke_color}; stroke-width: {block_stroke_width}; fill: {block_fill_color}; }}
",
        byte_font_size = style.byte_font_size,
        start_byte_color = style.start_byte_color,
        end_byte_color = style.end_byte_color,
        label_color = style.label_color,
        label_font_size = style.label_font_size,
        title_color = style.title_color,
        title_font_size = style.title_font_size,
        block_stroke_color = style.block_stroke_color,
        block_stroke_width = style.block_stroke_width,
        block_fill_color = style.block_fill_color,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketSvgError {
    ZeroBitsPerRow,
}

impl fmt::Display for PacketSvgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBitsPerRow => f.write_str("bits_per_row must be greater than zero"),
        }
    }
}

impl std::error::Error for PacketSvgError {}

fn block_x(start: u32, config: &PacketConfig) -> u64 {
    u64::from(start % config.bits_per_row) * u64::from(config.bit_width)
}

fn word_y(row: usize, config: &PacketConfig) -> u64 {
    row as u64 * (u64::from(config.row_height) + u64::from(config.padding_y))
        + u64::from(config.padding_y)
}

fn block_width(block: &PacketRowBlock, config: &PacketConfig) -> u64 {
    (u64::from(block.bits()) * u64::from(config.bit_width))
        .saturating_sub(u64::from(config.padding_x))
}

fn push_u64(out: &mut String, value: u64) {
    let mut buffer = itoa::Buffer::new();
    out.push_str(buffer.format(value));
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: u64) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_u64(out, value);
    out.push('"');
}

fn push_text_element(out: &mut String, class: &str, x: u64, y: u64, anchor: Option<&str>, text: &str) {
    out.push_str("  <text class=\"");
    out.push_str(class);
    out.push('"');
    push_attr(out, "x", x);
    push_attr(out, "y", y);
    if let Some(anchor) = anchor {
        out.push_str(" text-anchor=\"");
        out.push_str(anchor);
        out.push('"');
    }
    out.push('>');
    push_escaped(out, text);
    out.push_str("</text>\n");
}

pub fn render_packet_svg(
    ast: &PacketAst,
    layout: &PacketLayout,
    config: &PacketConfig,
) -> Result<String, PacketSvgError> {
    render_packet_svg_with_style(ast, layout, config, &PacketStyle::default())
}

/// Emits the laid-out rows as a standalone SVG document.
///
/// Per row block: a `rect.packetBlock` at the pixel position derived from its
/// bit range, a centered `text.packetLabel`, and (when `show_bits` is on) a
/// `text.packetByte start` annotation plus a `text.packetByte end` annotation
/// for blocks spanning more than one bit. Accessibility strings become the
/// document's `<title>`/`<desc>`.
///
/// `config` must be the resolved config the layout was produced with.
pub fn render_packet_svg_with_style(
    ast: &PacketAst,
    layout: &PacketLayout,
    config: &PacketConfig,
    style: &PacketStyle,
) -> Result<String, PacketSvgError> {
    if config.bits_per_row == 0 {
        return Err(PacketSvgError::ZeroBitsPerRow);
    }

    let title = ast.title().filter(|title| !title.is_empty());
    let title_offset = if title.is_some() {
        TITLE_BLOCK_HEIGHT
    } else {
        0
    };
    let total_width = u64::from(config.bits_per_row) * u64::from(config.bit_width);
    let rows = layout.words().len() as u64;
    let total_height = title_offset
        + rows * (u64::from(config.row_height) + u64::from(config.padding_y))
        + u64::from(config.padding_y);

    let mut out = String::new();
    out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\"");
    push_attr(&mut out, "width", total_width);
    push_attr(&mut out, "height", total_height);
    out.push_str(" viewBox=\"0 0 ");
    push_u64(&mut out, total_width);
    out.push(' ');
    push_u64(&mut out, total_height);
    out.push_str("\" role=\"graphics-document document\" aria-roledescription=\"packet\">\n");

    if let Some(acc_title) = ast.acc_title() {
        out.push_str("  <title>");
        push_escaped(&mut out, acc_title);
        out.push_str("</title>\n");
    }
    if let Some(acc_descr) = ast.acc_descr() {
        out.push_str("  <desc>");
        push_escaped(&mut out, acc_descr);
        out.push_str("</desc>\n");
    }

    out.push_str("  <style>\n");
    out.push_str(&packet_styles(style));
    out.push_str("  </style>\n");

    if let Some(title) = title {
        push_text_element(
            &mut out,
            "packetTitle",
            total_width / 2,
            title_offset.saturating_sub(8),
            Some("middle"),
            title,
        );
    }

    for (row, word) in layout.words().iter().enumerate() {
        let y = title_offset + word_y(row, config);
        for block in word {
            let x = block_x(block.start(), config);
            let width = block_width(block, config);
            let height = u64::from(config.row_height);

            out.push_str("  <rect class=\"packetBlock\"");
            push_attr(&mut out, "x", x);
            push_attr(&mut out, "y", y);
            push_attr(&mut out, "width", width);
            push_attr(&mut out, "height", height);
            out.push_str("/>\n");

            push_text_element(
                &mut out,
                "packetLabel",
                x + width / 2,
                y + height / 2,
                Some("middle"),
                block.label(),
            );

            if config.show_bits {
                let bit_y = y.saturating_sub(BIT_INDEX_RISE);
                let mut buffer = itoa::Buffer::new();
                push_text_element(
                    &mut out,
                    "packetByte start",
                    x,
                    bit_y,
                    None,
                    buffer.format(block.start()),
                );
                if block.bits() > 1 {
                    push_text_element(
                        &mut out,
                        "packetByte end",
                        x + width,
                        bit_y,
                        Some("end"),
                        buffer.format(block.end()),
                    );
                }
            }
        }
    }

    out.push_str("</svg>\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{
        block_width, block_x, packet_styles, render_packet_svg, render_packet_svg_with_style,
        word_y, PacketStyle, PacketSvgError,
    };
    use crate::config::{PacketConfig, PacketConfigOverrides};
    use crate::layout::{layout_packet, PacketRowBlock};
    use crate::model::{PacketAst, PacketBlock};

    fn ast_with_blocks(blocks: impl IntoIterator<Item = PacketBlock>) -> PacketAst {
        let mut ast = PacketAst::default();
        ast.blocks_mut().extend(blocks);
        ast
    }

    #[test]
    fn geometry_follows_the_bit_grid() {
        let config = PacketConfig::resolve(&PacketConfigOverrides::default());
        assert_eq!(config.padding_y, 15);

        // Bit 40 sits in the second row, column 8.
        assert_eq!(block_x(40, &config), 8 * 32);
        // Row 0 starts one padding below the top, row 1 one row+padding later.
        assert_eq!(word_y(0, &config), 15);
        assert_eq!(word_y(1, &config), 32 + 15 + 15);

        let block = PacketRowBlock::new(0, 15, "Source Port");
        assert_eq!(block_width(&block, &config), 16 * 32 - 5);
    }

    #[test]
    fn emits_rects_labels_and_bit_indices() {
        let ast = ast_with_blocks([
            PacketBlock::range(0, 15, "Source Port"),
            PacketBlock::range(16, 31, "Destination Port"),
            PacketBlock::range(32, 32, "Flag"),
        ]);
        let config = PacketConfig::resolve(&PacketConfigOverrides::default());
        let layout = layout_packet(&ast, &config).expect("layout");

        let svg = render_packet_svg(&ast, &layout, &config).expect("render");

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains(
            "<rect class=\"packetBlock\" x=\"0\" y=\"15\" width=\"507\" height=\"32\"/>"
        ));
        assert!(svg.contains(
            "<rect class=\"packetBlock\" x=\"512\" y=\"15\" width=\"507\" height=\"32\"/>"
        ));
        // The single-bit flag starts the second row.
        assert!(svg.contains(
            "<rect class=\"packetBlock\" x=\"0\" y=\"62\" width=\"27\" height=\"32\"/>"
        ));

        assert!(svg.contains(">Source Port</text>"));
        assert!(svg.contains("<text class=\"packetByte start\" x=\"0\" y=\"13\">0</text>"));
        assert!(svg.contains("<text class=\"packetByte end\" x=\"507\" y=\"13\" text-anchor=\"end\">15</text>"));
        // Single-bit blocks only get a start index.
        assert!(svg.contains("<text class=\"packetByte start\" x=\"0\" y=\"60\">32</text>"));
        assert_eq!(svg.matches("packetByte end").count(), 2);
    }

    #[test]
    fn show_bits_off_suppresses_bit_indices() {
        let ast = ast_with_blocks([PacketBlock::range(0, 7, "Data")]);
        let config = PacketConfig {
            show_bits: false,
            ..PacketConfig::default()
        };
        let layout = layout_packet(&ast, &config).expect("layout");

        let svg = render_packet_svg(&ast, &layout, &config).expect("render");
        assert!(!svg.contains("packetByte start"));
        assert!(!svg.contains("packetByte end"));
    }

    #[test]
    fn title_and_accessibility_strings_are_emitted_escaped() {
        let mut ast = ast_with_blocks([PacketBlock::range(0, 7, "A & B")]);
        ast.set_title(Some("Header <v2>"));
        ast.set_acc_title(Some("Packet \"header\""));
        ast.set_acc_descr(Some("Bits & bytes"));
        let config = PacketConfig::default();
        let layout = layout_packet(&ast, &config).expect("layout");

        let svg = render_packet_svg(&ast, &layout, &config).expect("render");
        assert!(svg.contains("<title>Packet &quot;header&quot;</title>"));
        assert!(svg.contains("<desc>Bits &amp; bytes</desc>"));
        assert!(svg.contains(">Header &lt;v2&gt;</text>"));
        assert!(svg.contains(">A &amp; B</text>"));
    }

    #[test]
    fn stylesheet_is_parameterized_by_the_style_options() {
        let style = PacketStyle {
            block_fill_color: "#102030".to_owned(),
            ..PacketStyle::default()
        };
        let styles = packet_styles(&style);
        assert!(styles.contains(".packetBlock { stroke: black; stroke-width: 1; fill: #102030; }"));
        assert!(styles.contains(".packetByte { font-size: 10px; }"));

        let ast = ast_with_blocks([PacketBlock::range(0, 7, "Data")]);
        let config = PacketConfig::default();
        let layout = layout_packet(&ast, &config).expect("layout");
        let svg =
            render_packet_svg_with_style(&ast, &layout, &config, &style).expect("render");
        assert!(svg.contains("fill: #102030;"));
    }

    #[test]
    fn rejects_zero_bits_per_row() {
        let ast = PacketAst::default();
        let layout = crate::layout::PacketLayout::default();
        let config = PacketConfig {
            bits_per_row: 0,
            ..PacketConfig::default()
        };

        assert_eq!(
            render_packet_svg(&ast, &layout, &config),
            Err(PacketSvgError::ZeroBitsPerRow)
        );
    }
}
