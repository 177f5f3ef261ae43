// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Font data model wrapping a `norad` UFO for batch anchor edits.
//!
//! `Workspace` owns a loaded `.ufo` and exposes just what the anchor
//! operations need: glyph names in font order, per-glyph bounds, anchor
//! reads and writes on the default layer, and saving back to disk. The
//! whole `norad::Font` is kept so that saving preserves everything the
//! anchor tools never touch.

use norad::{Anchor, Codepoints, Font, Glyph, Name};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::geometry::{Bounds, glyph_bounds};
use crate::error::{AnchorsError, Result};

/// UFO lib key holding the designer's glyph order
const GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// A loaded UFO font source
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Path to the UFO directory
    pub path: PathBuf,

    font: Font,
}

impl Workspace {
    /// Load a UFO from a directory path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let font = Font::load(path).map_err(|source| AnchorsError::LoadFont {
            path: path.to_path_buf(),
            source,
        })?;

        let workspace = Self::from_font(path, font);
        tracing::info!(
            "Loaded font: {} ({} glyphs)",
            workspace.display_name(),
            workspace.glyph_count()
        );
        Ok(workspace)
    }

    /// Wrap an already loaded (or freshly built) font
    pub fn from_font<P: AsRef<Path>>(path: P, font: Font) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            font,
        }
    }

    /// Get the display name of the font (Family + Style)
    pub fn display_name(&self) -> String {
        let family = self
            .font
            .font_info
            .family_name
            .as_deref()
            .unwrap_or("Untitled Font");
        let style = self
            .font
            .font_info
            .style_name
            .as_deref()
            .unwrap_or("Regular");
        format!("{} {}", family, style)
    }

    /// Base file name of the UFO (e.g. `MyFont-Bold.ufo`)
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Get the number of glyphs in the default layer
    pub fn glyph_count(&self) -> usize {
        self.font.default_layer().len()
    }

    pub fn contains_glyph(&self, name: &str) -> bool {
        self.font.default_layer().contains_glyph(name)
    }

    /// Glyph names in font order.
    ///
    /// Uses `public.glyphOrder` when it lists exactly as many names as the
    /// font has glyphs; otherwise falls back to sorted names.
    pub fn glyph_names(&self) -> Vec<String> {
        let layer = self.font.default_layer();

        match self.glyph_order() {
            Some(order) if order.len() == layer.len() => order
                .into_iter()
                .filter(|name| layer.contains_glyph(name))
                .collect(),
            _ => {
                let mut names: Vec<String> = layer.iter().map(|g| g.name().to_string()).collect();
                names.sort();
                names
            }
        }
    }

    /// The raw `public.glyphOrder` list, if the font has one
    pub fn glyph_order(&self) -> Option<Vec<String>> {
        self.font
            .lib
            .get(GLYPH_ORDER_KEY)
            .and_then(|v| v.as_array())
            .map(|names| {
                names
                    .iter()
                    .filter_map(|v| v.as_string())
                    .map(|s| s.to_string())
                    .collect()
            })
    }

    /// Replace `public.glyphOrder`. Names need not exist in the font.
    pub fn set_glyph_order<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order = names
            .into_iter()
            .map(|name| plist::Value::String(name.into()))
            .collect();
        self.font
            .lib
            .insert(GLYPH_ORDER_KEY.to_string(), plist::Value::Array(order));
    }

    /// Get a glyph by name
    pub fn get_glyph(&self, name: &str) -> Option<&Glyph> {
        self.font.default_layer().get_glyph(name)
    }

    /// Bounding box of a glyph's outline (components included)
    pub fn bounds(&self, name: &str) -> Option<Bounds> {
        let layer = self.font.default_layer();
        layer
            .get_glyph(name)
            .and_then(|glyph| glyph_bounds(glyph, layer))
    }

    /// The anchors of a glyph, or `None` if the glyph does not exist
    pub fn anchors(&self, name: &str) -> Option<&[Anchor]> {
        self.get_glyph(name).map(|glyph| glyph.anchors.as_slice())
    }

    /// Mutable access to a glyph's anchor list
    pub fn anchors_mut(&mut self, name: &str) -> Option<&mut Vec<Anchor>> {
        self.font
            .default_layer_mut()
            .get_glyph_mut(name)
            .map(|glyph| &mut glyph.anchors)
    }

    /// Names of the anchors a glyph currently has (nameless anchors skipped)
    pub fn anchor_names(&self, name: &str) -> HashSet<String> {
        self.anchors(name)
            .unwrap_or_default()
            .iter()
            .filter_map(|anchor| anchor.name.as_ref())
            .map(|name| name.to_string())
            .collect()
    }

    /// Remove every anchor from every glyph of the default layer.
    ///
    /// Returns the number of glyphs that had anchors.
    pub fn clear_all_anchors(&mut self) -> usize {
        let mut cleared = 0;
        for glyph in self.font.default_layer_mut().iter_mut() {
            if !glyph.anchors.is_empty() {
                glyph.anchors.clear();
                cleared += 1;
            }
        }
        cleared
    }

    /// Append a named anchor to a glyph.
    ///
    /// Returns `Ok(false)` if the glyph does not exist. No duplicate check
    /// is made here; callers decide whether a name may repeat.
    pub fn append_anchor(&mut self, glyph: &str, name: &str, x: i32, y: i32) -> Result<bool> {
        let name = Name::new(name).map_err(|_| AnchorsError::InvalidName(name.to_string()))?;
        match self.anchors_mut(glyph) {
            Some(anchors) => {
                anchors.push(Anchor::new(x as f64, y as f64, Some(name), None, None, None));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Make `codepoint` the glyph's only Unicode value.
    ///
    /// Returns `None` if the glyph does not exist, otherwise whether its
    /// Unicode values changed.
    pub fn set_unicode(&mut self, glyph: &str, codepoint: char) -> Option<bool> {
        let glyph = self.font.default_layer_mut().get_glyph_mut(glyph)?;
        let codepoints = Codepoints::new([codepoint]);
        if glyph.codepoints == codepoints {
            return Some(false);
        }
        glyph.codepoints = codepoints;
        Some(true)
    }

    /// Save the UFO back to where it was loaded from
    pub fn save(&self) -> Result<()> {
        self.font
            .save(&self.path)
            .map_err(|source| AnchorsError::SaveFont {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!("Saved: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use norad::{Contour, ContourPoint, PointType};

    /// A closed rectangle contour
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Contour {
        let pt = |x, y| ContourPoint::new(x, y, PointType::Line, false, None, None, None);
        Contour::new(
            vec![pt(x0, y0), pt(x0, y1), pt(x1, y1), pt(x1, y0)],
            None,
            None,
        )
    }

    /// Build an in-memory workspace from `(glyph, optional outline box)` pairs
    pub fn workspace(glyphs: &[(&str, Option<(f64, f64, f64, f64)>)]) -> Workspace {
        let mut font = Font::new();
        for (name, outline) in glyphs {
            let mut glyph = Glyph::new(name);
            if let Some((x0, y0, x1, y1)) = outline {
                glyph.contours.push(rect(*x0, *y0, *x1, *y1));
            }
            font.default_layer_mut().insert_glyph(glyph);
        }
        Workspace::from_font("Test.ufo", font)
    }

    /// `(name, x, y)` for each anchor of a glyph, in order
    pub fn anchor_tuples(ws: &Workspace, glyph: &str) -> Vec<(String, i32, i32)> {
        ws.anchors(glyph)
            .unwrap_or_default()
            .iter()
            .map(|a| {
                (
                    a.name.as_ref().map(|n| n.to_string()).unwrap_or_default(),
                    a.x as i32,
                    a.y as i32,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_glyph_names_sorted_without_glyph_order() {
        let ws = workspace(&[("b", None), ("a", None), ("c", None)]);
        assert_eq!(ws.glyph_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_glyph_names_follow_complete_glyph_order() {
        let mut ws = workspace(&[("b", None), ("a", None)]);
        ws.set_glyph_order(["b", "a"]);
        assert_eq!(ws.glyph_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_glyph_names_ignore_incomplete_glyph_order() {
        let mut ws = workspace(&[("b", None), ("a", None), ("c", None)]);
        ws.set_glyph_order(["c"]);
        assert_eq!(ws.glyph_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_anchor() {
        let mut ws = workspace(&[("a", None)]);
        assert!(ws.append_anchor("a", "top", 250, 700).unwrap());
        assert!(!ws.append_anchor("missing", "top", 0, 0).unwrap());
        assert_eq!(anchor_tuples(&ws, "a"), vec![("top".to_string(), 250, 700)]);
        assert!(ws.anchor_names("a").contains("top"));
    }

    #[test]
    fn test_append_anchor_rejects_invalid_name() {
        let mut ws = workspace(&[("a", None)]);
        assert!(matches!(
            ws.append_anchor("a", "", 0, 0),
            Err(AnchorsError::InvalidName(_))
        ));
    }

    #[test]
    fn test_clear_all_anchors_ignores_glyph_order() {
        let mut ws = workspace(&[("a", None), ("b", None)]);
        ws.set_glyph_order(["a", "x"]);
        ws.append_anchor("a", "top", 1, 1).unwrap();
        ws.append_anchor("b", "top", 2, 2).unwrap();

        assert_eq!(ws.clear_all_anchors(), 2);
        assert!(ws.anchors("a").unwrap().is_empty());
        assert!(ws.anchors("b").unwrap().is_empty());
    }

    #[test]
    fn test_set_glyph_order_round_trips() {
        let mut ws = workspace(&[("a", None)]);
        assert_eq!(ws.glyph_order(), None);
        ws.set_glyph_order(["a", "notdef"]);
        assert_eq!(
            ws.glyph_order(),
            Some(vec!["a".to_string(), "notdef".to_string()])
        );
    }

    #[test]
    fn test_set_unicode() {
        let mut ws = workspace(&[("a", None)]);
        assert_eq!(ws.set_unicode("a", 'a'), Some(true));
        assert_eq!(ws.set_unicode("a", 'a'), Some(false));
        assert_eq!(ws.set_unicode("b", 'b'), None);
        let codepoints: Vec<char> = ws.get_glyph("a").unwrap().codepoints.iter().collect();
        assert_eq!(codepoints, vec!['a']);
    }

    #[test]
    fn test_bounds_of_missing_glyph() {
        let ws = workspace(&[("a", Some((0.0, 0.0, 10.0, 10.0)))]);
        assert_eq!(ws.bounds("a"), Some(Bounds::new(0, 0, 10, 10)));
        assert_eq!(ws.bounds("b"), None);
    }

    #[test]
    fn test_file_name() {
        let ws = Workspace::from_font("/fonts/Sans_1.ufo", Font::new());
        assert_eq!(ws.file_name(), "Sans_1.ufo");
    }
}
