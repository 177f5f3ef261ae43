// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Delete anchors by name, or clear whole glyphs.

use indexmap::{IndexMap, IndexSet};
use std::path::Path;

use super::reader::{Diagnostic, DiagnosticKind, read_spec_lines, spec_records};
use crate::error::Result;
use crate::model::Workspace;

/// Anchor names to delete, per glyph.
///
/// Read from `glyph<TAB>anchor` lines; any further columns (such as the
/// coordinates of an exported anchor list) are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletionSpec {
    glyphs: IndexMap<String, IndexSet<String>>,
}

impl DeletionSpec {
    pub fn load(path: &Path) -> Result<(Self, Vec<Diagnostic>)> {
        let lines = read_spec_lines(path)?;
        Ok(Self::parse(&lines))
    }

    pub fn parse<S: AsRef<str>>(lines: &[S]) -> (Self, Vec<Diagnostic>) {
        let mut spec = Self::default();
        let mut diagnostics = Vec::new();

        for record in spec_records(lines) {
            match record.columns.as_slice() {
                [glyph_name, anchor_name, ..] => {
                    spec.glyphs
                        .entry(glyph_name.to_string())
                        .or_default()
                        .insert(anchor_name.to_string());
                }
                _ => diagnostics.push(Diagnostic::new(
                    record.line,
                    DiagnosticKind::TooFewColumns { min: 2 },
                )),
            }
        }

        (spec, diagnostics)
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, glyph_name: &str) -> Option<&IndexSet<String>> {
        self.glyphs.get(glyph_name)
    }
}

/// Remove every anchor named in `spec`.
///
/// Every anchor carrying a listed name is removed, including repeats.
/// Returns the number of anchors removed; missing glyphs are skipped.
pub fn delete_anchors(spec: &DeletionSpec, workspace: &mut Workspace) -> usize {
    let mut deleted_count = 0;

    for (glyph_name, anchor_names) in &spec.glyphs {
        let Some(anchors) = workspace.anchors_mut(glyph_name) else {
            continue;
        };
        let before = anchors.len();
        anchors.retain(|anchor| {
            !anchor
                .name
                .as_ref()
                .is_some_and(|name| anchor_names.contains::<str>(name))
        });
        deleted_count += before - anchors.len();
    }

    deleted_count
}

/// Remove all anchors from the named glyphs.
///
/// Returns the number of anchors removed.
pub fn clear_anchors<S: AsRef<str>>(workspace: &mut Workspace, glyph_names: &[S]) -> usize {
    let mut cleared = 0;
    for glyph_name in glyph_names {
        match workspace.anchors_mut(glyph_name.as_ref()) {
            Some(anchors) => {
                cleared += anchors.len();
                anchors.clear();
            }
            None => tracing::warn!("Glyph {} not found in the font", glyph_name.as_ref()),
        }
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::workspace::test_support::{anchor_tuples, workspace};

    fn font_with_anchors() -> Workspace {
        let mut ws = workspace(&[("a", None), ("b", None)]);
        ws.append_anchor("a", "top", 250, 500).unwrap();
        ws.append_anchor("a", "bottom", 250, 0).unwrap();
        ws.append_anchor("b", "top", 300, 700).unwrap();
        ws
    }

    #[test]
    fn test_parse_ignores_coordinates() {
        let (spec, diagnostics) =
            DeletionSpec::parse(&["a\ttop\t250\t500", "a\tbottom", "b", "# c\ttop"]);
        let names: Vec<&String> = spec.get("a").unwrap().iter().collect();
        assert_eq!(names, vec!["top", "bottom"]);
        assert!(!spec.is_empty());
        assert!(DeletionSpec::parse(&["# only a comment", "b"]).0.is_empty());
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(3, DiagnosticKind::TooFewColumns { min: 2 })]
        );
    }

    #[test]
    fn test_delete_named_anchors() {
        let mut ws = font_with_anchors();
        let (spec, _) = DeletionSpec::parse(&["a\ttop", "b\tbottom", "missing\ttop"]);

        assert_eq!(delete_anchors(&spec, &mut ws), 1);
        assert_eq!(anchor_tuples(&ws, "a"), vec![("bottom".to_string(), 250, 0)]);
        assert_eq!(anchor_tuples(&ws, "b"), vec![("top".to_string(), 300, 700)]);
    }

    #[test]
    fn test_delete_removes_repeated_names() {
        let mut ws = font_with_anchors();
        ws.append_anchor("a", "top", 1, 1).unwrap();
        let (spec, _) = DeletionSpec::parse(&["a\ttop"]);

        assert_eq!(delete_anchors(&spec, &mut ws), 2);
        assert_eq!(anchor_tuples(&ws, "a"), vec![("bottom".to_string(), 250, 0)]);
    }

    #[test]
    fn test_clear_anchors() {
        let mut ws = font_with_anchors();
        assert_eq!(clear_anchors(&mut ws, &["a", "missing"]), 2);
        assert!(anchor_tuples(&ws, "a").is_empty());
        assert_eq!(anchor_tuples(&ws, "b").len(), 1);
        assert_eq!(clear_anchors(&mut ws, &["a"]), 0);
    }
}
