// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment/rectangle intersection predicates.
//!
//! ## Compatible test
//!
//! [`intersects`] runs, in order:
//! 1. a trivial reject when the segment's bounding box and the rectangle do not overlap;
//! 2. a trivial accept when the rectangle contains the segment's bounding box;
//! 3. a slope test: the y-values of the infinite line through the segment are
//!    evaluated at the rectangle's left and right edges. If the rectangle's
//!    vertical span lies entirely below or entirely above both values the
//!    segment misses.
//!
//! Vertical segments skip step 3 (the slope is undefined) and are decided by
//! step 1 alone.
//!
//! Step 3 extrapolates past the segment's endpoints. Because step 1 already
//! bounds both the x-range and the y-range, the extrapolated part can never
//! reach into the rectangle on its own, so the result matches [`intersects_exact`]
//! for every finite input up to floating-point rounding.
//!
//! ## Clipping
//!
//! [`clip_segment`] is a Cohen–Sutherland clip against the closed rectangle.
//! It returns the part of the segment inside the rectangle, which is also what
//! [`intersects_exact`] is built on.

use kurbo::{Line, Point, Rect};

use crate::outcode::Outcode;
use crate::rect::{contains_rect_closed, overlaps_closed, segment_bounds};

/// Whether `line` touches the closed rectangle `rect`.
///
/// Zero-length segments and zero-area rectangles are valid. Touching an edge
/// or a corner counts. `rect` need not be normalized.
pub fn intersects(line: Line, rect: Rect) -> bool {
    debug_assert!(is_finite(line, rect), "non-finite geometry: {line:?} {rect:?}");
    let rect = rect.abs();
    let bounds = segment_bounds(line);

    if !overlaps_closed(rect, bounds) {
        return false;
    }
    if contains_rect_closed(rect, bounds) {
        return true;
    }

    let Line { p0, p1 } = line;
    // A vertical segment's x-extent is a single value, so the overlap test
    // above already placed it inside the rectangle's x-range with an
    // overlapping y-range.
    if p0.x == p1.x {
        return true;
    }

    let slope = (p0.y - p1.y) / (p1.x - p0.x);
    let y_for_x = |x: f64| p0.y - (x - p0.x) * slope;
    let y_at_left = y_for_x(rect.x0);
    let y_at_right = y_for_x(rect.x1);

    // Rectangle lies entirely above the line at both edges.
    if rect.y1 < y_at_left && rect.y1 < y_at_right {
        return false;
    }
    // Rectangle lies entirely below the line at both edges.
    if rect.y0 > y_at_left && rect.y0 > y_at_right {
        return false;
    }
    true
}

/// Two edges per endpoint, plus one final classification.
const MAX_CLIPS: usize = 5;

/// Whether `line` touches the closed rectangle `rect`, decided by clipping.
pub fn intersects_exact(line: Line, rect: Rect) -> bool {
    clip_segment(line, rect).is_some()
}

/// Clip `line` to the closed rectangle `rect`.
///
/// Returns the portion of the segment inside the rectangle, with its
/// direction preserved, or `None` when they do not touch. A segment touching a
/// single corner clips to a zero-length line. `rect` need not be normalized.
pub fn clip_segment(line: Line, rect: Rect) -> Option<Line> {
    debug_assert!(is_finite(line, rect), "non-finite geometry: {line:?} {rect:?}");
    let rect = rect.abs();
    let Line { mut p0, mut p1 } = line;
    let mut c0 = Outcode::of(p0, rect);
    let mut c1 = Outcode::of(p1, rect);

    for _ in 0..MAX_CLIPS {
        if (c0 | c1).is_empty() {
            return Some(Line::new(p0, p1));
        }
        if c0.intersects(c1) {
            return None;
        }
        // At least one endpoint is outside; move it onto the violated edge.
        // The clipped coordinate is assigned exactly, so each edge is clipped
        // at most once per endpoint.
        let out = if c0.is_empty() { c1 } else { c0 };
        let p = clip_to_edge(p0, p1, out, rect);
        if out == c0 {
            p0 = p;
            c0 = Outcode::of(p0, rect);
        } else {
            p1 = p;
            c1 = Outcode::of(p1, rect);
        }
    }
    (c0 | c1).is_empty().then_some(Line::new(p0, p1))
}

/// Intersection of the line through `p0`/`p1` with the first edge named by `out`.
///
/// The endpoints lie on opposite sides of that edge, so the divisor is non-zero.
fn clip_to_edge(p0: Point, p1: Point, out: Outcode, rect: Rect) -> Point {
    let (dx, dy) = (p1.x - p0.x, p1.y - p0.y);
    if out.contains(Outcode::TOP) {
        Point::new(p0.x + dx * (rect.y0 - p0.y) / dy, rect.y0)
    } else if out.contains(Outcode::BOTTOM) {
        Point::new(p0.x + dx * (rect.y1 - p0.y) / dy, rect.y1)
    } else if out.contains(Outcode::RIGHT) {
        Point::new(rect.x1, p0.y + dy * (rect.x1 - p0.x) / dx)
    } else {
        Point::new(rect.x0, p0.y + dy * (rect.x0 - p0.x) / dx)
    }
}

fn is_finite(line: Line, rect: Rect) -> bool {
    line.p0.is_finite() && line.p1.is_finite() && rect.is_finite()
}
