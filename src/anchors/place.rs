// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Place anchors from a parsed placement file.
//!
//! Unlike [`replace_anchors`](super::replace_anchors), placing never
//! removes anything: an anchor whose name the glyph already has is left
//! alone, so running the same file twice is a no-op the second time.

use super::position::{PositionSpec, ReferencePoints};
use super::spec_file::AnchorSpecFile;
use crate::model::Workspace;

/// Add the anchors of `spec` to the glyphs of `workspace`.
///
/// Returns how many anchors were added. Glyphs the font does not have are
/// skipped silently, since one file is often shared across a family.
/// Saving is left to the caller.
pub fn place_anchors(spec: &AnchorSpecFile, workspace: &mut Workspace) -> usize {
    let mut placed_count = 0;

    for (glyph_name, entries) in spec.iter() {
        if !workspace.contains_glyph(glyph_name) {
            continue;
        }

        // Only measure the outline when a keyword needs it
        let reference_points = if entries.values().any(|position| position.is_keyword()) {
            workspace
                .bounds(glyph_name)
                .map(ReferencePoints::from_bounds)
        } else {
            None
        };

        // Taken once, before anything is added
        let existing = workspace.anchor_names(glyph_name);

        for (anchor_name, position) in entries {
            let Some((x, y)) = position.resolve(reference_points.as_ref()) else {
                if let PositionSpec::Keyword(keyword) = position {
                    tracing::warn!(
                        "Glyph '{}' has no outline; anchor '{}' at {} skipped",
                        glyph_name,
                        anchor_name,
                        keyword
                    );
                }
                continue;
            };
            if existing.contains(anchor_name) {
                tracing::debug!("'{}' already has anchor '{}'", glyph_name, anchor_name);
                continue;
            }

            match workspace.append_anchor(glyph_name, anchor_name, x, y) {
                Ok(true) => placed_count += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!("Skipping anchor on '{}': {}", glyph_name, e),
            }
        }
    }

    placed_count
}
