// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Set Unicode values from a GOADB (glyph order and alias database) file.
//!
//! Each line is `final production [override]`, whitespace separated. The
//! Unicode value of the production glyph comes from the final name when
//! it is `uniXXXX` or `uXXXXX`, else from the override column. Other
//! final names (standard AGL names) are left alone.

use indexmap::IndexMap;
use std::path::Path;

use crate::anchors::reader::{Diagnostic, DiagnosticKind, glyph_list_records, read_spec_lines};
use crate::error::Result;
use crate::model::Workspace;

/// Production glyph name to Unicode value, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoadbFile {
    pub unicodes: IndexMap<String, char>,
}

impl GoadbFile {
    pub fn load(path: &Path) -> Result<(Self, Vec<Diagnostic>)> {
        let lines = read_spec_lines(path)?;
        Ok(Self::parse(&lines))
    }

    /// A production name listed twice takes the later value
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> (Self, Vec<Diagnostic>) {
        let mut file = Self::default();
        let mut diagnostics = Vec::new();

        for record in glyph_list_records(lines) {
            let [final_name, production, rest @ ..] = record.columns.as_slice() else {
                diagnostics.push(Diagnostic::new(
                    record.line,
                    DiagnosticKind::TooFewColumns { min: 2 },
                ));
                continue;
            };

            let codepoint = match (unicode_from_name(final_name), rest.first()) {
                (Some(c), _) => c,
                (None, Some(unicode_override)) => match parse_codepoint(unicode_override) {
                    Some(c) => c,
                    None => {
                        diagnostics.push(Diagnostic::new(
                            record.line,
                            DiagnosticKind::InvalidUnicode,
                        ));
                        continue;
                    }
                },
                (None, None) => {
                    tracing::debug!("No Unicode value for '{}'", final_name);
                    continue;
                }
            };

            file.unicodes.insert(production.to_string(), codepoint);
        }

        (file, diagnostics)
    }

    pub fn is_empty(&self) -> bool {
        self.unicodes.is_empty()
    }
}

/// `uniXXXX` (four upper-case hex digits) or `uXXXXX` (five)
fn unicode_from_name(name: &str) -> Option<char> {
    let hex = match (name.strip_prefix("uni"), name.strip_prefix('u')) {
        (Some(hex), _) if hex.len() == 4 => hex,
        (_, Some(hex)) if hex.len() == 5 => hex,
        _ => return None,
    };
    if !hex.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Parse a Unicode override column.
///
/// Accepts `uniXXXX`, `uXXXX` to `uXXXXXX`, `U+XXXX` or bare hex (four to
/// six digits, either case). Surrogates and values past U+10FFFF are
/// rejected.
pub fn parse_codepoint(text: &str) -> Option<char> {
    let hex = ["uni", "U+", "u"]
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .unwrap_or(text);
    if !(4..=6).contains(&hex.len()) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Give every listed glyph of the font its Unicode value.
///
/// Returns how many glyphs changed. Listed glyphs the font lacks are
/// skipped.
pub fn set_unicodes(goadb: &GoadbFile, workspace: &mut Workspace) -> usize {
    let mut changed = 0;
    for (glyph_name, &codepoint) in &goadb.unicodes {
        match workspace.set_unicode(glyph_name, codepoint) {
            Some(true) => changed += 1,
            Some(false) => {}
            None => tracing::debug!("Glyph '{}' not in the font", glyph_name),
        }
    }
    changed
}
