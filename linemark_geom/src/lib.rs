// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linemark Geom: line segment versus rectangle intersection tests.
//!
//! This crate answers one question for marquee selection: does a line segment
//! touch an axis-aligned rectangle?
//!
//! - [`intersects`] is the compatible test: a bounding-box prune, a
//!   containment fast path, then a slope test against the infinite line.
//! - [`intersects_exact`] clips the segment with Cohen–Sutherland [`Outcode`]s.
//!   The two agree up to floating-point rounding; [`clip_segment`] also
//!   returns the inside portion.
//!
//! Geometry is Kurbo-native: segments are [`kurbo::Line`] (`p0` is the start,
//! `p1` the end) and rectangles are [`kurbo::Rect`].
//! Every test in this crate treats rectangles as CLOSED: a segment that only
//! touches an edge or a corner intersects. Note that [`kurbo::Rect::contains`]
//! is half-open, so it is not used here.
//!
//! ## Float semantics
//!
//! Inputs are assumed finite. NaN or infinite coordinates are a caller error
//! and the result is unspecified; debug builds may assert.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Line, Point};
//! use linemark_geom::{intersects, intersects_exact, rect_from_ltwh};
//!
//! let rect = rect_from_ltwh(2.0, 2.0, 8.0, 8.0);
//!
//! // Horizontal segment at y = 4 entering from the left.
//! let inside = Line::new(Point::new(1.0, 4.0), Point::new(4.0, 4.0));
//! assert!(intersects(inside, rect));
//!
//! // Horizontal segment at y = 1, above the top edge.
//! let above = Line::new(Point::new(1.0, 1.0), Point::new(3.0, 1.0));
//! assert!(!intersects(above, rect));
//! assert!(!intersects_exact(above, rect));
//! ```

#![no_std]

pub mod outcode;
pub mod predicate;
pub mod rect;

pub use outcode::Outcode;
pub use predicate::{clip_segment, intersects, intersects_exact};
pub use rect::{contains_rect_closed, overlaps_closed, rect_from_ltwh, segment_bounds};
