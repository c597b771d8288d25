// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// One packet field as authored: an inclusive bit range plus a label.
///
/// `end` is optional in the source form; a missing end means a single-bit
/// field. Defaulting happens in the layout driver, not here, so the AST
/// carries exactly what was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketBlock {
    start: u32,
    end: Option<u32>,
    label: String,
}

impl PacketBlock {
    pub fn new(start: u32, end: Option<u32>, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// A single-bit field at `start`.
    pub fn single(start: u32, label: impl Into<String>) -> Self {
        Self::new(start, None, label)
    }

    /// A field spanning `start..=end`.
    pub fn range(start: u32, end: u32, label: impl Into<String>) -> Self {
        Self::new(start, Some(end), label)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> Option<u32> {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A parsed packet diagram.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PacketAst {
    blocks: Vec<PacketBlock>,
    title: Option<String>,
    acc_title: Option<String>,
    acc_descr: Option<String>,
}

impl PacketAst {
    pub fn blocks(&self) -> &[PacketBlock] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut Vec<PacketBlock> {
        &mut self.blocks
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title<T: Into<String>>(&mut self, title: Option<T>) {
        self.title = title.map(Into::into);
    }

    pub fn acc_title(&self) -> Option<&str> {
        self.acc_title.as_deref()
    }

    pub fn set_acc_title<T: Into<String>>(&mut self, acc_title: Option<T>) {
        self.acc_title = acc_title.map(Into::into);
    }

    pub fn acc_descr(&self) -> Option<&str> {
        self.acc_descr.as_deref()
    }

    pub fn set_acc_descr<T: Into<String>>(&mut self, acc_descr: Option<T>) {
        self.acc_descr = acc_descr.map(Into::into);
    }
}
