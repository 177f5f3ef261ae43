// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Rename anchors from a `glyph<TAB>current<TAB>new` file.

use indexmap::IndexMap;
use indexmap::map::Entry;
use norad::Name;
use std::path::Path;

use super::reader::{Diagnostic, DiagnosticKind, read_spec_lines, spec_records};
use crate::error::Result;
use crate::model::Workspace;

/// Current anchor name to new anchor name, per glyph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenameSpec {
    glyphs: IndexMap<String, IndexMap<String, String>>,
}

impl RenameSpec {
    pub fn load(path: &Path) -> Result<(Self, Vec<Diagnostic>)> {
        let lines = read_spec_lines(path)?;
        Ok(Self::parse(&lines))
    }

    /// Parse renaming lines; a repeated `(glyph, current)` pair keeps the
    /// first new name.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> (Self, Vec<Diagnostic>) {
        let mut spec = Self::default();
        let mut diagnostics = Vec::new();

        for record in spec_records(lines) {
            let [glyph_name, current, new, ..] = record.columns.as_slice() else {
                diagnostics.push(Diagnostic::new(
                    record.line,
                    DiagnosticKind::TooFewColumns { min: 3 },
                ));
                continue;
            };

            let renames = spec.glyphs.entry(glyph_name.to_string()).or_default();
            match renames.entry(current.to_string()) {
                Entry::Occupied(_) => {
                    diagnostics.push(Diagnostic::new(record.line, DiagnosticKind::DuplicateRename));
                }
                Entry::Vacant(slot) => {
                    slot.insert(new.to_string());
                }
            }
        }

        (spec, diagnostics)
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, glyph_name: &str) -> Option<&IndexMap<String, String>> {
        self.glyphs.get(glyph_name)
    }
}

/// Rename the anchors listed in `spec`.
///
/// Each anchor is looked up by its name before this call, so `a -> b`
/// and `b -> a` on the same glyph swap the two names. Returns the number
/// of anchors renamed.
pub fn rename_anchors(spec: &RenameSpec, workspace: &mut Workspace) -> usize {
    let mut renamed_count = 0;

    for (glyph_name, renames) in &spec.glyphs {
        let Some(anchors) = workspace.anchors_mut(glyph_name) else {
            continue;
        };

        for anchor in anchors.iter_mut() {
            let Some(new_name) = anchor
                .name
                .as_ref()
                .and_then(|name| renames.get::<str>(name))
            else {
                continue;
            };
            match Name::new(new_name) {
                Ok(name) => {
                    anchor.name = Some(name);
                    renamed_count += 1;
                }
                Err(_) => tracing::warn!(
                    "Cannot rename anchor in '{}': invalid name '{}'",
                    glyph_name,
                    new_name
                ),
            }
        }
    }

    renamed_count
}
