// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end anchor edits against UFOs written to disk.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use norad::{Contour, ContourPoint, Font, Glyph, PointType};
use tempfile::TempDir;
use ufo_anchors::anchors::{
    AnchorList, AnchorSpecFile, DeletionSpec, DiagnosticKind, RenameSpec, delete_anchors,
    export_anchors, place_anchors, rename_anchors, replace_anchors, write_anchor_list,
};
use ufo_anchors::edit_font;
use ufo_anchors::error::AnchorsError;
use ufo_anchors::glyphs::{
    EncodingFile, GoadbFile, apply_glyph_order, find_encoding_file, set_unicodes,
};
use ufo_anchors::model::Workspace;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Contour {
    let pt = |x, y| ContourPoint::new(x, y, PointType::Line, false, None, None, None);
    Contour::new(
        vec![pt(x0, y0), pt(x0, y1), pt(x1, y1), pt(x1, y0)],
        None,
        None,
    )
}

/// Write a small UFO with glyphs `a` (10,-20)-(110,80), `b` and an empty `space`
fn write_font(dir: &Path, name: &str) -> PathBuf {
    let mut font = Font::new();
    font.font_info.family_name = Some("Test Sans".to_string());

    let mut a = Glyph::new("a");
    a.contours.push(rect(10.0, -20.0, 110.0, 80.0));
    let mut b = Glyph::new("b");
    b.contours.push(rect(0.0, 0.0, 500.0, 700.0));
    let space = Glyph::new("space");

    let layer = font.default_layer_mut();
    layer.insert_glyph(a);
    layer.insert_glyph(b);
    layer.insert_glyph(space);

    let path = dir.join(name);
    font.save(&path).unwrap();
    path
}

fn write_text(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn anchors_of(path: &Path, glyph: &str) -> Vec<(String, i32, i32)> {
    let ws = Workspace::load(path).unwrap();
    ws.anchors(glyph)
        .unwrap()
        .iter()
        .map(|a| {
            (
                a.name.as_ref().unwrap().to_string(),
                a.x as i32,
                a.y as i32,
            )
        })
        .collect()
}

fn modified(path: &Path) -> SystemTime {
    std::fs::metadata(path).unwrap().modified().unwrap()
}

const PLACEMENT: &str = "\
# anchors for the test font
a\ttop\tTOP_LEFT
a\tcenter\tMID_CENTER
a\tbottom\tBOT_RIGHT

b\ttop\t250\t700+12
b\t_origin
missing\ttop\t1\t1
space\ttop\tTOP_CENTER
";

#[test]
fn place_is_idempotent_across_saves() {
    let dir = TempDir::new().unwrap();
    let font_path = write_font(dir.path(), "Test.ufo");
    let spec_path = write_text(dir.path(), "placement.txt", PLACEMENT);

    let (spec, diagnostics) = AnchorSpecFile::load(&spec_path).unwrap();
    assert!(diagnostics.is_empty());

    let mut ws = Workspace::load(&font_path).unwrap();
    assert_eq!(place_anchors(&spec, &mut ws), 5);
    ws.save().unwrap();

    assert_eq!(
        anchors_of(&font_path, "a"),
        vec![
            ("top".to_string(), 10, 80),
            ("center".to_string(), 60, 30),
            ("bottom".to_string(), 110, -20),
        ]
    );
    assert_eq!(
        anchors_of(&font_path, "b"),
        vec![("top".to_string(), 250, 712), ("_origin".to_string(), 0, 0)]
    );
    assert!(anchors_of(&font_path, "space").is_empty());

    let mut ws = Workspace::load(&font_path).unwrap();
    assert_eq!(place_anchors(&spec, &mut ws), 0);
    assert_eq!(anchors_of(&font_path, "a").len(), 3);
}

#[test]
fn one_spec_serves_several_fonts() {
    let dir = TempDir::new().unwrap();
    let regular = write_font(dir.path(), "Test_0.ufo");
    let bold = write_font(dir.path(), "Test_1.ufo");
    let spec_path = write_text(dir.path(), "placement.txt", "a\ttop\tTOP_CENTER\n");

    let (spec, _) = AnchorSpecFile::load(&spec_path).unwrap();
    for path in [&regular, &bold] {
        let mut ws = Workspace::load(path).unwrap();
        assert_eq!(place_anchors(&spec, &mut ws), 1);
        ws.save().unwrap();
    }

    assert_eq!(anchors_of(&regular, "a"), vec![("top".to_string(), 60, 80)]);
    assert_eq!(anchors_of(&bold, "a"), vec![("top".to_string(), 60, 80)]);
}

#[test]
fn malformed_lines_are_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let spec_path = write_text(
        dir.path(),
        "placement.txt",
        "a\ntop\na\ttop\t1\t2\t3\na\ttop\t1\t2\na\ttop\tTOP_LEFT\n",
    );

    let (spec, diagnostics) = AnchorSpecFile::load(&spec_path).unwrap();
    assert_eq!(spec.anchor_count(), 1);
    let kinds: Vec<(usize, DiagnosticKind)> =
        diagnostics.iter().map(|d| (d.line, d.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (1, DiagnosticKind::TooFewColumns { min: 2 }),
            (2, DiagnosticKind::TooFewColumns { min: 2 }),
            (3, DiagnosticKind::UnparsablePosition),
            (5, DiagnosticKind::DuplicateAnchor),
        ]
    );
}

#[test]
fn unreadable_inputs_are_errors() {
    let dir = TempDir::new().unwrap();
    let err = AnchorSpecFile::load(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, AnchorsError::Read { .. }));

    let err = Workspace::load(dir.path().join("Nope.ufo")).unwrap_err();
    assert!(matches!(err, AnchorsError::LoadFont { .. }));
}

#[test]
fn rename_then_delete() {
    let dir = TempDir::new().unwrap();
    let font_path = write_font(dir.path(), "Test.ufo");

    let mut ws = Workspace::load(&font_path).unwrap();
    let (spec, _) = AnchorSpecFile::parse(&["a\ttop\tTOP_CENTER", "a\tbottom\tBOT_CENTER"]);
    place_anchors(&spec, &mut ws);

    let (renames, _) = RenameSpec::parse(&["a\ttop\tabove"]);
    assert_eq!(rename_anchors(&renames, &mut ws), 1);
    let (deletions, _) = DeletionSpec::parse(&["a\tbottom\t60\t-20"]);
    assert_eq!(delete_anchors(&deletions, &mut ws), 1);
    ws.save().unwrap();

    assert_eq!(anchors_of(&font_path, "a"), vec![("above".to_string(), 60, 80)]);
}

#[test]
fn exported_list_restores_anchors() {
    let dir = TempDir::new().unwrap();
    let source = write_font(dir.path(), "Source.ufo");
    let target = write_font(dir.path(), "Target.ufo");

    let mut ws = Workspace::load(&source).unwrap();
    let (spec, _) = AnchorSpecFile::parse(&["b\ttop\t250\t712", "a\tbottom\tBOT_CENTER"]);
    place_anchors(&spec, &mut ws);

    let list_path = dir.path().join("anchors_0");
    let file = std::fs::File::create(&list_path).unwrap();
    write_anchor_list(file, &export_anchors(&ws)).unwrap();

    let mut target_ws = Workspace::load(&target).unwrap();
    target_ws.append_anchor("b", "stale", 0, 0).unwrap();
    let (list, diagnostics) = AnchorList::load(&list_path).unwrap();
    assert!(diagnostics.is_empty());

    let report = replace_anchors(&list, &mut target_ws);
    assert_eq!(report.added, 2);
    assert!(report.missing_glyphs.is_empty());
    target_ws.save().unwrap();

    assert_eq!(anchors_of(&target, "a"), vec![("bottom".to_string(), 60, -20)]);
    assert_eq!(anchors_of(&target, "b"), vec![("top".to_string(), 250, 712)]);
}

#[test]
fn only_changed_fonts_are_saved_and_reported() {
    let dir = TempDir::new().unwrap();
    let changed = write_font(dir.path(), "Test_0.ufo");
    let unchanged = write_font(dir.path(), "Test_1.ufo");
    let (spec, _) = AnchorSpecFile::parse(&["a\ttop\tTOP_CENTER", "b\ttop\t250\t700"]);

    // The second master already has every anchor
    let mut ws = Workspace::load(&unchanged).unwrap();
    assert_eq!(place_anchors(&spec, &mut ws), 2);
    ws.save().unwrap();
    let metainfo = unchanged.join("metainfo.plist");
    let glif = unchanged.join("glyphs").join("a.glif");
    let before = (modified(&metainfo), modified(&glif));

    let mut out = Vec::new();
    let place = |ws: &mut Workspace| place_anchors(&spec, ws);
    assert_eq!(edit_font(&changed, "anchors placed", &mut out, place).unwrap(), 2);
    assert_eq!(edit_font(&unchanged, "anchors placed", &mut out, place).unwrap(), 0);

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Test_0.ufo\n  2 anchors placed\n"
    );
    assert_eq!((modified(&metainfo), modified(&glif)), before);
    assert_eq!(anchors_of(&changed, "b"), vec![("top".to_string(), 250, 700)]);
}

#[test]
fn glyph_lists_set_order_and_unicodes() {
    let dir = TempDir::new().unwrap();
    let font_path = write_font(dir.path(), "Test.ufo");
    // Classic Mac line endings
    let enc = write_text(dir.path(), "Test.enc", "% Test Sans\r.notdef\rspace\rb\ra\r");
    let goadb = write_text(
        dir.path(),
        "GOADB",
        "uni0061\ta\nuni0062 b\nspace space uni0020\n",
    );

    assert_eq!(find_encoding_file(dir.path()).unwrap(), enc);
    let (encoding, diagnostics) = EncodingFile::load(&enc).unwrap();
    assert!(diagnostics.is_empty());
    let (unicodes, diagnostics) = GoadbFile::load(&goadb).unwrap();
    assert!(diagnostics.is_empty());

    let mut ws = Workspace::load(&font_path).unwrap();
    let report = apply_glyph_order(&encoding, &mut ws);
    assert!(report.changed);
    assert_eq!(report.missing_glyphs, vec![".notdef".to_string()]);
    assert_eq!(set_unicodes(&unicodes, &mut ws), 3);
    ws.save().unwrap();

    let ws = Workspace::load(&font_path).unwrap();
    assert_eq!(
        ws.glyph_order(),
        Some(
            [".notdef", "space", "b", "a"]
                .map(String::from)
                .to_vec()
        )
    );
    let space: Vec<char> = ws.get_glyph("space").unwrap().codepoints.iter().collect();
    assert_eq!(space, vec![' ']);
}
