// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-rectangle helpers over [`kurbo::Rect`].

use kurbo::{Line, Rect};

/// Build a rectangle from its left/top corner and size.
///
/// Right is `left + width` and bottom is `top + height`. A negative size is
/// normalized so that `x0 <= x1` and `y0 <= y1`. Zero sizes are kept; a
/// zero-area rectangle is valid input to every test in this crate.
pub fn rect_from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect::new(left, top, left + width, top + height).abs()
}

/// Axis-aligned bounding box of a segment.
///
/// Degenerate for axis-parallel and zero-length segments.
pub fn segment_bounds(line: Line) -> Rect {
    Rect::from_points(line.p0, line.p1)
}

/// Whether `outer` contains `inner`, edges included.
///
/// Both rectangles are expected to be normalized.
pub fn contains_rect_closed(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

/// Whether two closed rectangles share at least one point.
///
/// Touching edges or corners overlap. Both rectangles are expected to be
/// normalized.
pub fn overlaps_closed(a: Rect, b: Rect) -> bool {
    !(a.x0 > b.x1 || a.x1 < b.x0 || a.y0 > b.y1 || a.y1 < b.y0)
}
