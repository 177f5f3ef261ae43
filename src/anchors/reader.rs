// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Line reading and per-line diagnostics shared by all text file formats.
//!
//! Anchor files are tab separated ([`spec_records`]); encoding and GOADB
//! glyph lists are whitespace separated ([`glyph_list_records`]).

use std::fmt;
use std::path::Path;

use crate::error::{AnchorsError, Result};
use crate::settings::{format, glyph_list};

/// Read an anchor file into lines.
///
/// An unreadable file is the only fatal condition for anchor files; it is
/// reported before any parsing starts.
pub fn read_spec_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| AnchorsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Reading file {} ...", path.display());
    Ok(split_lines(&text))
}

/// Split text on `\n`, `\r\n` or a lone `\r` (classic Mac files)
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    let text = text.strip_suffix(['\n', '\r']).unwrap_or(text.as_str());
    if text.is_empty() {
        return Vec::new();
    }
    text.split(['\n', '\r']).map(str::to_string).collect()
}

/// One non-blank, non-comment line split into its tab-separated columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRecord<'a> {
    /// 1-based line number in the source file
    pub line: usize,
    pub columns: Vec<&'a str>,
}

/// Iterate the meaningful lines of an anchor file.
///
/// Lines are trimmed before anything else; blank lines and lines starting
/// with `#` are skipped without a diagnostic.
pub fn spec_records<S: AsRef<str>>(lines: &[S]) -> impl Iterator<Item = SpecRecord<'_>> {
    lines.iter().enumerate().filter_map(|(index, line)| {
        let trimmed = line.as_ref().trim();
        if trimmed.is_empty() || trimmed.starts_with(format::COMMENT) {
            return None;
        }
        Some(SpecRecord {
            line: index + 1,
            columns: trimmed.split(format::SEPARATOR).collect(),
        })
    })
}

/// Iterate the meaningful lines of a glyph list.
///
/// Columns are separated by any run of whitespace; blank lines and lines
/// starting with `#` or `%` are skipped without a diagnostic.
pub fn glyph_list_records<S: AsRef<str>>(lines: &[S]) -> impl Iterator<Item = SpecRecord<'_>> {
    lines.iter().enumerate().filter_map(|(index, line)| {
        let trimmed = line.as_ref().trim();
        if trimmed.is_empty() || trimmed.starts_with(glyph_list::COMMENTS) {
            return None;
        }
        Some(SpecRecord {
            line: index + 1,
            columns: trimmed.split_whitespace().collect(),
        })
    })
}

/// A recoverable problem with one line of a text file.
///
/// The offending line is skipped; parsing carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Not enough columns for the format
    TooFewColumns { min: usize },
    /// A strict format wants exactly this many columns
    WrongColumnCount { expected: usize },
    /// Position columns are neither empty, a keyword, nor two expressions
    UnparsablePosition,
    /// Glyph or anchor name column is empty
    MissingName,
    /// A coordinate column is not an integer
    InvalidCoordinate,
    /// Same glyph and anchor name seen earlier in the file
    DuplicateAnchor,
    /// Same glyph and current anchor name seen earlier in a renaming file
    DuplicateRename,
    /// Same glyph name seen earlier in a glyph list
    DuplicateGlyph,
    /// A Unicode override that is not a valid code point
    InvalidUnicode,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line;
        match self.kind {
            DiagnosticKind::TooFewColumns { min } => {
                write!(f, "line {line} has fewer than {min} columns")
            }
            DiagnosticKind::WrongColumnCount { expected } => {
                write!(f, "line {line} does not have {expected} columns")
            }
            DiagnosticKind::UnparsablePosition => write!(f, "cannot parse position on line {line}"),
            DiagnosticKind::MissingName => {
                write!(f, "line {line} has no glyph name or no anchor name")
            }
            DiagnosticKind::InvalidCoordinate => {
                write!(f, "line {line} has an invalid anchor position")
            }
            DiagnosticKind::DuplicateAnchor => write!(f, "duplicate anchor entry at line {line}"),
            DiagnosticKind::DuplicateRename => {
                write!(f, "duplicate anchor renaming entry at line {line}")
            }
            DiagnosticKind::DuplicateGlyph => write!(f, "duplicate glyph name at line {line}"),
            DiagnosticKind::InvalidUnicode => write!(f, "invalid Unicode value on line {line}"),
        }
    }
}
