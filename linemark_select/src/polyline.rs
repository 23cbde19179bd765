// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-by-point polyline construction.
//!
//! Each placed point after the first yields the segment from the previous
//! point. [`PolylineBuilder::close`] finishes the shape, optionally joining the
//! last point back to the first.

use alloc::vec::Vec;

use kurbo::{Line, Point};

use crate::error::PlaceError;

/// Pending points of the shape being drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolylineBuilder {
    points: Vec<Point>,
}

impl PolylineBuilder {
    /// Create a builder with no pending points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points placed since the last [`close`](Self::close) or [`clear`](Self::clear).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Place a point.
    ///
    /// Returns the new segment from the previous point, or `None` for the first
    /// point of a shape. A point equal to the previous one is rejected and not
    /// recorded.
    pub fn place(&mut self, p: Point) -> Result<Option<Line>, PlaceError> {
        let Some(&last) = self.points.last() else {
            self.points.push(p);
            return Ok(None);
        };
        if last == p {
            return Err(PlaceError::DuplicatePoint { x: p.x, y: p.y });
        }
        self.points.push(p);
        Ok(Some(Line::new(last, p)))
    }

    /// Finish the current shape.
    ///
    /// With more than two points that are neither all on one vertical nor all
    /// on one horizontal, returns the closing segment from the last point to
    /// the first. Pending points are cleared in every case.
    pub fn close(&mut self) -> Option<Line> {
        let closing = match (self.points.first(), self.points.last()) {
            (Some(&first), Some(&last)) if self.points.len() > 2 && !self.axis_collinear() => {
                Some(Line::new(last, first))
            }
            _ => None,
        };
        self.points.clear();
        closing
    }

    /// Drop pending points without closing.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    fn axis_collinear(&self) -> bool {
        let Some(&first) = self.points.first() else {
            return true;
        };
        self.points.iter().all(|p| p.x == first.x) || self.points.iter().all(|p| p.y == first.y)
    }
}
