// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph geometry - converts UFO contours to Kurbo paths and measures them

use kurbo::{Affine, BezPath, ParamCurveExtrema, PathEl, Point, Rect};
use norad::{Contour, ContourPoint, Glyph, Layer, PointType};

/// Components nested deeper than this are ignored (guards against cycles)
const MAX_COMPONENT_DEPTH: usize = 32;

/// A glyph's bounding box in font units.
///
/// Each edge is the outline's float extent truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Bounds {
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }
}

/// Measure a glyph including its components.
///
/// Returns `None` for glyphs with no outline (spaces, empty glyphs, or
/// glyphs whose components all point at missing bases).
pub fn glyph_bounds(glyph: &Glyph, layer: &Layer) -> Option<Bounds> {
    let path = glyph_to_bezpath_with_components(glyph, layer);
    let rect = path_extent(&path)?;
    Some(Bounds::new(
        rect.x0 as i32,
        rect.y0 as i32,
        rect.x1 as i32,
        rect.y1 as i32,
    ))
}

/// Tight bounds of a path, counting lone points as well as segments.
///
/// A subpath that is only a move (a single-point contour) has no segments
/// but still contributes its point.
fn path_extent(path: &BezPath) -> Option<Rect> {
    let mut extent: Option<Rect> = None;
    for el in path.elements() {
        if let PathEl::MoveTo(p) = *el {
            extent = Some(extent.map_or(Rect::from_points(p, p), |r| r.union_pt(p)));
        }
    }
    for seg in path.segments() {
        let seg_box = ParamCurveExtrema::bounding_box(&seg);
        extent = Some(extent.map_or(seg_box, |r| r.union(seg_box)));
    }
    extent
}

/// Convert a glyph to a BezPath including components
///
/// Component references are resolved against `layer` recursively and
/// their transforms applied.
pub fn glyph_to_bezpath_with_components(glyph: &Glyph, layer: &Layer) -> BezPath {
    let mut path = BezPath::new();
    for contour in &glyph.contours {
        append_contour_to_path(&mut path, contour);
    }
    append_components_to_path(&mut path, glyph, layer, Affine::IDENTITY, 0);
    path
}

/// Recursively append component paths to a BezPath
fn append_components_to_path(
    path: &mut BezPath,
    glyph: &Glyph,
    layer: &Layer,
    parent_transform: Affine,
    depth: usize,
) {
    if depth >= MAX_COMPONENT_DEPTH {
        tracing::warn!(
            "Component nesting in '{}' exceeds {} levels, ignoring deeper components",
            glyph.name(),
            MAX_COMPONENT_DEPTH
        );
        return;
    }

    for component in &glyph.components {
        let base_glyph = match layer.get_glyph(&component.base) {
            Some(g) => g,
            None => {
                tracing::warn!(
                    "Component base glyph '{}' not found in layer",
                    component.base
                );
                continue;
            }
        };

        let t = &component.transform;
        let transform = Affine::new([
            t.x_scale, t.xy_scale, t.yx_scale, t.y_scale, t.x_offset, t.y_offset,
        ]);
        let combined_transform = parent_transform * transform;

        for contour in &base_glyph.contours {
            let mut contour_path = BezPath::new();
            append_contour_to_path(&mut contour_path, contour);
            let transformed = combined_transform * &contour_path;
            path.extend(transformed.elements().iter().cloned());
        }

        append_components_to_path(path, base_glyph, layer, combined_transform, depth + 1);
    }
}

/// Append a single contour to a BezPath
fn append_contour_to_path(path: &mut BezPath, contour: &Contour) {
    let points = &contour.points;
    if points.is_empty() {
        return;
    }

    // An open contour starts with a move point; a closed one may start
    // anywhere, so rotate it to begin at an on-curve point.
    let is_open = points[0].typ == PointType::Move;
    let start_idx = points
        .iter()
        .position(|p| p.typ != PointType::OffCurve)
        .unwrap_or(0);
    let rotated: Vec<&ContourPoint> = points[start_idx..]
        .iter()
        .chain(points[..start_idx].iter())
        .collect();

    // All off-curve: a TrueType closed quadratic with no on-curve points.
    if rotated.iter().all(|p| p.typ == PointType::OffCurve) {
        let implied = midpoint(rotated[rotated.len() - 1], rotated[0]);
        path.move_to(implied);
        append_quad_spline(path, &rotated, implied);
        path.close_path();
        return;
    }

    path.move_to(point_to_kurbo(rotated[0]));

    let mut pending: Vec<&ContourPoint> = Vec::new();
    for &pt in rotated.iter().skip(1) {
        match pt.typ {
            PointType::OffCurve => pending.push(pt),
            PointType::Move | PointType::Line => {
                path.line_to(point_to_kurbo(pt));
                pending.clear();
            }
            PointType::Curve => {
                add_curve_segment(path, &pending, point_to_kurbo(pt));
                pending.clear();
            }
            PointType::QCurve => {
                append_quad_spline(path, &pending, point_to_kurbo(pt));
                pending.clear();
            }
        }
    }

    if is_open {
        return;
    }

    // Close back to the start, consuming any trailing off-curve points
    let start = point_to_kurbo(rotated[0]);
    match rotated[0].typ {
        PointType::Curve => add_curve_segment(path, &pending, start),
        PointType::QCurve => append_quad_spline(path, &pending, start),
        _ if !pending.is_empty() => add_curve_segment(path, &pending, start),
        _ => {}
    }
    path.close_path();
}

/// Convert a ContourPoint to a Kurbo Point
fn point_to_kurbo(pt: &ContourPoint) -> Point {
    Point::new(pt.x, pt.y)
}

fn midpoint(a: &ContourPoint, b: &ContourPoint) -> Point {
    point_to_kurbo(a).midpoint(point_to_kurbo(b))
}

/// Add a cubic (or degenerate) segment ending at `end`
fn add_curve_segment(path: &mut BezPath, off_curve_points: &[&ContourPoint], end: Point) {
    match off_curve_points {
        [] => path.line_to(end),
        [cp] => path.quad_to(point_to_kurbo(cp), end),
        [cp1, cp2] => path.curve_to(point_to_kurbo(cp1), point_to_kurbo(cp2), end),
        // More than two off-curves before a curve point is not valid UFO,
        // but the outer handles still bound the segment.
        [first, .., last] => path.curve_to(point_to_kurbo(first), point_to_kurbo(last), end),
    }
}

/// Add a TrueType quadratic spline with implied on-curve midpoints
fn append_quad_spline(path: &mut BezPath, off_curve_points: &[&ContourPoint], end: Point) {
    match off_curve_points {
        [] => path.line_to(end),
        [.., last] => {
            for pair in off_curve_points.windows(2) {
                path.quad_to(point_to_kurbo(pair[0]), midpoint(pair[0], pair[1]));
            }
            path.quad_to(point_to_kurbo(last), end);
        }
    }
}
