// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton — packet diagram layout and rendering (Mermaid `packet` subset).
//!
//! Pipeline: [`format`] parses Mermaid packet text into a [`model::PacketAst`],
//! [`layout`] re-partitions the labeled bit ranges into fixed-width rows, and
//! [`render`] draws the rows as Unicode text or SVG.

pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;
