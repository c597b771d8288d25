// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid-ish parsing and exporting for packet diagrams.

pub mod packet;

pub use packet::{
    export_packet_diagram, parse_packet_diagram, MermaidPacketExportError, MermaidPacketParseError,
};
