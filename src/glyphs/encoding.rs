// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Load an encoding file as the font's glyph order.
//!
//! An encoding (`.enc`) file lists one glyph per line; only the first
//! whitespace-separated word counts. The list becomes `public.glyphOrder`
//! as written, including names the font does not have yet.

use indexmap::IndexSet;
use std::path::{Path, PathBuf};

use crate::anchors::reader::{Diagnostic, DiagnosticKind, glyph_list_records, read_spec_lines};
use crate::error::{AnchorsError, Result};
use crate::model::Workspace;
use crate::settings::glyph_list;

/// Glyph names of an encoding file, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodingFile {
    pub names: IndexSet<String>,
}

impl EncodingFile {
    pub fn load(path: &Path) -> Result<(Self, Vec<Diagnostic>)> {
        let lines = read_spec_lines(path)?;
        Ok(Self::parse(&lines))
    }

    /// Repeated names keep their first position
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> (Self, Vec<Diagnostic>) {
        let mut file = Self::default();
        let mut diagnostics = Vec::new();

        for record in glyph_list_records(lines) {
            let Some(&name) = record.columns.first() else {
                continue;
            };
            if !file.names.insert(name.to_string()) {
                diagnostics.push(Diagnostic::new(record.line, DiagnosticKind::DuplicateGlyph));
            }
        }

        (file, diagnostics)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// What [`apply_glyph_order`] did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphOrderReport {
    /// Whether `public.glyphOrder` differs from before
    pub changed: bool,
    /// Names now in the glyph order
    pub listed: usize,
    /// Listed names the font does not have (in list order)
    pub missing_glyphs: Vec<String>,
}

/// Store the encoding's names as the font's glyph order.
///
/// An empty encoding changes nothing.
pub fn apply_glyph_order(encoding: &EncodingFile, workspace: &mut Workspace) -> GlyphOrderReport {
    let mut report = GlyphOrderReport::default();
    if encoding.is_empty() {
        return report;
    }

    report.listed = encoding.names.len();
    report.missing_glyphs = encoding
        .names
        .iter()
        .filter(|name| !workspace.contains_glyph(name))
        .cloned()
        .collect();
    if !report.missing_glyphs.is_empty() {
        tracing::info!(
            "{} listed glyphs are not in {}",
            report.missing_glyphs.len(),
            workspace.file_name()
        );
    }

    let unchanged = workspace
        .glyph_order()
        .is_some_and(|order| order.iter().eq(encoding.names.iter()));
    if !unchanged {
        workspace.set_glyph_order(encoding.names.iter().cloned());
        report.changed = true;
    }

    report
}

/// The one `.enc` file in `dir`.
///
/// None or several is an error; the caller then has to name the file.
pub fn find_encoding_file(dir: &Path) -> Result<PathBuf> {
    let entries = std::fs::read_dir(dir).map_err(|source| AnchorsError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut found: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == glyph_list::ENCODING_EXTENSION)
        })
        .collect();

    if found.len() == 1 {
        Ok(found.remove(0))
    } else {
        Err(AnchorsError::EncodingFile {
            dir: dir.to_path_buf(),
            found: found.len(),
        })
    }
}
