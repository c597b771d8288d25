// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::packet_ast::{PacketAst, PacketBlock};

/// The TCP header from the Mermaid packet docs; 224 bits, mixes wide fields,
/// single-bit flags and fields that straddle row boundaries at 32 bits/row.
pub(crate) fn tcp_header() -> PacketAst {
    let mut ast = PacketAst::default();
    ast.set_title(Some("TCP Packet"));

    for block in [
        PacketBlock::range(0, 15, "Source Port"),
        PacketBlock::range(16, 31, "Destination Port"),
        PacketBlock::range(32, 63, "Sequence Number"),
        PacketBlock::range(64, 95, "Acknowledgment Number"),
        PacketBlock::range(96, 99, "Data Offset"),
        PacketBlock::range(100, 105, "Reserved"),
        PacketBlock::single(106, "URG"),
        PacketBlock::single(107, "ACK"),
        PacketBlock::single(108, "PSH"),
        PacketBlock::single(109, "RST"),
        PacketBlock::single(110, "SYN"),
        PacketBlock::single(111, "FIN"),
        PacketBlock::range(112, 127, "Window"),
        PacketBlock::range(128, 143, "Checksum"),
        PacketBlock::range(144, 159, "Urgent Pointer"),
        PacketBlock::range(160, 191, "(Options and Padding)"),
        PacketBlock::range(192, 223, "Data (variable length)"),
    ] {
        ast.blocks_mut().push(block);
    }

    ast
}

/// 10 bits across two rows at 8 bits/row; the second row is partial.
pub(crate) fn partial_last_row() -> PacketAst {
    let mut ast = PacketAst::default();
    ast.blocks_mut().push(PacketBlock::range(0, 7, "Head"));
    ast.blocks_mut().push(PacketBlock::range(8, 9, "Tail"));
    ast
}
