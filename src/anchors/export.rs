// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Write a font's anchors as a `glyph<TAB>anchor<TAB>x<TAB>y` list.

use std::io::{self, Write};

use super::replace::AnchorRecord;
use crate::model::Workspace;

/// Collect every named anchor of the font, in glyph order.
///
/// Coordinates are truncated toward zero. Nameless anchors cannot be
/// written to a list and are skipped with a warning.
pub fn export_anchors(workspace: &Workspace) -> Vec<AnchorRecord> {
    let mut records = Vec::new();

    for glyph_name in workspace.glyph_names() {
        for anchor in workspace.anchors(&glyph_name).unwrap_or_default() {
            let Some(name) = anchor.name.as_ref() else {
                tracing::warn!("Glyph {} has a nameless anchor. Skipped.", glyph_name);
                continue;
            };
            records.push(AnchorRecord {
                glyph: glyph_name.clone(),
                anchor: name.to_string(),
                x: anchor.x as i32,
                y: anchor.y as i32,
            });
        }
    }

    records
}

/// Write records as tab-separated lines
pub fn write_anchor_list<W: Write>(mut writer: W, records: &[AnchorRecord]) -> io::Result<()> {
    for record in records {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            record.glyph, record.anchor, record.x, record.y
        )?;
    }
    writer.flush()
}
