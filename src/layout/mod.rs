// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for packet diagrams.
//!
//! This module validates the authored blocks and re-partitions them into
//! fixed-width rows ("words") for the render backends.

pub mod packet;

pub use packet::{
    layout_packet, PacketLayout, PacketLayoutError, PacketRowBlock, PacketWord,
    MAX_PACKET_ROW_BLOCKS,
};
