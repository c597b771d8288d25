// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core packet data model.
//!
//! A packet diagram is an ordered list of labeled bit ranges plus optional
//! title and accessibility strings.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod packet_ast;

pub use packet_ast::{PacketAst, PacketBlock};
