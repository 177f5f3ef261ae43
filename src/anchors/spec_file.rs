// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchor placement files.
//!
//! Each line names a glyph, an anchor, and optionally a position:
//!
//! ```text
//! # glyph   anchor  position
//! a         top     250     500+12
//! a         bottom  BOT_CENTER
//! b         _top
//! ```
//!
//! Columns are tab-separated. No position means `(0, 0)`; one column must
//! be a [`PositionKeyword`]; two columns are x and y coordinate
//! expressions. The whole file is parsed before any font is touched.

use indexmap::IndexMap;
use indexmap::map::Entry;
use std::path::Path;

use super::expr::eval_coordinate;
use super::position::{PositionKeyword, PositionSpec};
use super::reader::{Diagnostic, DiagnosticKind, read_spec_lines, spec_records};
use crate::error::Result;

/// Anchors of one glyph, in file order
pub type AnchorEntries = IndexMap<String, PositionSpec>;

/// A parsed anchor placement file: glyph name to its anchor entries.
///
/// Glyphs keep the order of their first appearance. No glyph has an empty
/// entry list and no anchor name repeats within a glyph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorSpecFile {
    glyphs: IndexMap<String, AnchorEntries>,
}

impl AnchorSpecFile {
    /// Read and parse a placement file.
    ///
    /// Fails only if the file cannot be read. Malformed lines become
    /// diagnostics.
    pub fn load(path: &Path) -> Result<(Self, Vec<Diagnostic>)> {
        let lines = read_spec_lines(path)?;
        Ok(Self::parse(&lines))
    }

    /// Parse the lines of a placement file
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> (Self, Vec<Diagnostic>) {
        let mut spec = Self::default();
        let mut diagnostics = Vec::new();

        for record in spec_records(lines) {
            let [glyph_name, anchor_name, position @ ..] = record.columns.as_slice() else {
                diagnostics.push(Diagnostic::new(
                    record.line,
                    DiagnosticKind::TooFewColumns { min: 2 },
                ));
                continue;
            };

            let Some(position) = parse_position(position) else {
                diagnostics.push(Diagnostic::new(
                    record.line,
                    DiagnosticKind::UnparsablePosition,
                ));
                continue;
            };

            let entries = spec.glyphs.entry(glyph_name.to_string()).or_default();
            match entries.entry(anchor_name.to_string()) {
                Entry::Occupied(_) => {
                    diagnostics.push(Diagnostic::new(record.line, DiagnosticKind::DuplicateAnchor));
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        (spec, diagnostics)
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Number of glyphs with entries
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Total number of anchor entries
    pub fn anchor_count(&self) -> usize {
        self.glyphs.values().map(|entries| entries.len()).sum()
    }

    pub fn get(&self, glyph_name: &str) -> Option<&AnchorEntries> {
        self.glyphs.get(glyph_name)
    }

    /// Glyphs and their entries, in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnchorEntries)> {
        self.glyphs
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }
}

/// Interpret the position columns of a line
fn parse_position(columns: &[&str]) -> Option<PositionSpec> {
    match columns {
        [] => Some(PositionSpec::ORIGIN),
        [keyword] => keyword.parse::<PositionKeyword>().ok().map(PositionSpec::Keyword),
        [x, y] => {
            let x = eval_coordinate(x).ok()?;
            let y = eval_coordinate(y).ok()?;
            Some(PositionSpec::Explicit { x, y })
        }
        _ => None,
    }
}
