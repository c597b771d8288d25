// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use triton::format::mermaid::parse_packet_diagram;
use triton::model::PacketAst;

pub mod packet {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Tcp,
        FlagsDense,
        LongSingleField,
        ManyRows,
    }

    impl Case {
        pub fn id(self) -> &'static str {
            match self {
                Self::Tcp => "tcp",
                Self::FlagsDense => "flags_dense",
                Self::LongSingleField => "long_single_field",
                Self::ManyRows => "many_rows",
            }
        }
    }

    /// Mermaid source for `case`; `fixture` parses exactly this text, so the
    /// parse and layout benches measure the same diagrams.
    pub fn source(case: Case) -> String {
        match case {
            Case::Tcp => "\
packet-beta
title TCP Packet
0-15: \"Source Port\"
16-31: \"Destination Port\"
32-63: \"Sequence Number\"
64-95: \"Acknowledgment Number\"
96-99: \"Data Offset\"
100-105: \"Reserved\"
106: \"URG\"
107: \"ACK\"
108: \"PSH\"
109: \"RST\"
110: \"SYN\"
111: \"FIN\"
112-127: \"Window\"
128-143: \"Checksum\"
144-159: \"Urgent Pointer\"
160-191: \"(Options and Padding)\"
192-223: \"Data (variable length)\"
"
            .to_owned(),
            Case::FlagsDense => {
                // 512 single-bit fields: worst case for per-block overhead.
                let mut out = String::from("packet-beta\n");
                for bit in 0..512u32 {
                    out.push_str(&format!("{bit}: \"F{bit}\"\n"));
                }
                out
            }
            Case::LongSingleField => {
                // One field split across 128 rows at 32 bits/row.
                "packet-beta\n0-4095: \"Payload\"\n".to_owned()
            }
            Case::ManyRows => {
                // 256 16-bit fields, two per row.
                let mut out = String::from("packet-beta\n");
                for field in 0..256u32 {
                    let start = field * 16;
                    let end = start + 15;
                    out.push_str(&format!("{start}-{end}: \"Field {field}\"\n"));
                }
                out
            }
        }
    }

    pub fn fixture(case: Case) -> PacketAst {
        parse_packet_diagram(&source(case)).expect("fixture parses")
    }
}
