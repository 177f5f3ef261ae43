// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Replace a font's anchors with a complete anchor list.
//!
//! The list has exactly four columns per line,
//! `glyph<TAB>anchor<TAB>x<TAB>y`, the same format [`export_anchors`]
//! writes. Loading a list first clears every anchor in the font, so the
//! font ends up with exactly the anchors the list names.
//!
//! [`export_anchors`]: super::export_anchors

use std::path::Path;

use super::reader::{Diagnostic, DiagnosticKind, read_spec_lines, spec_records};
use crate::error::Result;
use crate::model::Workspace;

/// One anchor of an anchor list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRecord {
    pub glyph: String,
    pub anchor: String,
    pub x: i32,
    pub y: i32,
}

/// A complete anchor list, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorList {
    pub records: Vec<AnchorRecord>,
}

/// What [`replace_anchors`] did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceReport {
    /// Glyphs whose old anchors were removed
    pub cleared_glyphs: usize,
    /// Anchors added from the list
    pub added: usize,
    /// Glyph names in the list that the font does not have (in list order)
    pub missing_glyphs: Vec<String>,
}

impl ReplaceReport {
    pub fn changed(&self) -> bool {
        self.cleared_glyphs > 0 || self.added > 0
    }
}

impl AnchorList {
    pub fn load(path: &Path) -> Result<(Self, Vec<Diagnostic>)> {
        let lines = read_spec_lines(path)?;
        Ok(Self::parse(&lines))
    }

    pub fn parse<S: AsRef<str>>(lines: &[S]) -> (Self, Vec<Diagnostic>) {
        let mut list = Self::default();
        let mut diagnostics = Vec::new();

        for record in spec_records(lines) {
            let &[glyph, anchor, x, y] = record.columns.as_slice() else {
                diagnostics.push(Diagnostic::new(
                    record.line,
                    DiagnosticKind::WrongColumnCount { expected: 4 },
                ));
                continue;
            };

            if glyph.is_empty() || anchor.is_empty() {
                diagnostics.push(Diagnostic::new(record.line, DiagnosticKind::MissingName));
                continue;
            }

            let (Ok(x), Ok(y)) = (x.trim().parse::<i32>(), y.trim().parse::<i32>()) else {
                diagnostics.push(Diagnostic::new(
                    record.line,
                    DiagnosticKind::InvalidCoordinate,
                ));
                continue;
            };

            list.records.push(AnchorRecord {
                glyph: glyph.to_string(),
                anchor: anchor.to_string(),
                x,
                y,
            });
        }

        (list, diagnostics)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Clear every anchor in the font, then add the anchors of `list`.
///
/// An empty list changes nothing. Records for glyphs the font does not
/// have are collected in [`ReplaceReport::missing_glyphs`].
pub fn replace_anchors(list: &AnchorList, workspace: &mut Workspace) -> ReplaceReport {
    let mut report = ReplaceReport::default();
    if list.is_empty() {
        return report;
    }

    report.cleared_glyphs = workspace.clear_all_anchors();

    for record in &list.records {
        match workspace.append_anchor(&record.glyph, &record.anchor, record.x, record.y) {
            Ok(true) => report.added += 1,
            Ok(false) => {
                tracing::error!("Glyph {} not found in the font", record.glyph);
                report.missing_glyphs.push(record.glyph.clone());
            }
            Err(e) => tracing::warn!("Skipping anchor on '{}': {}", record.glyph, e),
        }
    }

    report
}
