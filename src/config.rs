// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Packet rendering configuration.
//!
//! A [`PacketConfig`] is resolved once per render by shallow-merging caller
//! overrides onto the built-in defaults. Override keys follow the Mermaid
//! packet config names (`bitsPerRow`, `bitWidth`, ...), so a Mermaid config
//! file fragment deserializes directly into [`PacketConfigOverrides`].

use serde::{Deserialize, Serialize};

/// Extra vertical padding reserved above each row for the bit-index labels
/// when `show_bits` is on.
pub const SHOW_BITS_PADDING_Y: u32 = 10;

/// Resolved per-render configuration for layout and pixel geometry.
///
/// Immutable for the duration of one diagram render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacketConfig {
    /// Bits rendered per row before wrapping to the next row.
    pub bits_per_row: u32,
    /// Pixel width of a single bit.
    pub bit_width: u32,
    /// Pixel height of a row rectangle.
    pub row_height: u32,
    pub padding_x: u32,
    pub padding_y: u32,
    /// Whether start/end bit indices are drawn above each block.
    pub show_bits: bool,
}

impl Default for PacketConfig {
    fn default() -> Self {
        Self {
            bits_per_row: 32,
            bit_width: 32,
            row_height: 32,
            padding_x: 5,
            padding_y: 5,
            show_bits: true,
        }
    }
}

/// Caller-supplied overrides, typically read from a JSON config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct PacketConfigOverrides {
    pub bits_per_row: Option<u32>,
    pub bit_width: Option<u32>,
    pub row_height: Option<u32>,
    pub padding_x: Option<u32>,
    pub padding_y: Option<u32>,
    pub show_bits: Option<bool>,
}

impl PacketConfig {
    /// Shallow-merges `overrides` onto the built-in defaults.
    ///
    /// When the merged `show_bits` is set, `padding_y` grows by
    /// [`SHOW_BITS_PADDING_Y`] to reserve space for the bit-index labels.
    /// Resolve once per render; the bump is not idempotent.
    pub fn resolve(overrides: &PacketConfigOverrides) -> Self {
        Self::resolve_onto(overrides, Self::default())
    }

    /// Shallow-merges `overrides` onto `defaults`.
    pub fn resolve_onto(overrides: &PacketConfigOverrides, defaults: Self) -> Self {
        let mut config = Self {
            bits_per_row: overrides.bits_per_row.unwrap_or(defaults.bits_per_row),
            bit_width: overrides.bit_width.unwrap_or(defaults.bit_width),
            row_height: overrides.row_height.unwrap_or(defaults.row_height),
            padding_x: overrides.padding_x.unwrap_or(defaults.padding_x),
            padding_y: overrides.padding_y.unwrap_or(defaults.padding_y),
            show_bits: overrides.show_bits.unwrap_or(defaults.show_bits),
        };

        if config.show_bits {
            config.padding_y = config.padding_y.saturating_add(SHOW_BITS_PADDING_Y);
        }

        config
    }
}
