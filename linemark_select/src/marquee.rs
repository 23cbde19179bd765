// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag rectangle built from an anchor and a moving corner.

use kurbo::{Point, Rect};

/// A marquee drag in progress.
///
/// The anchor is where the drag started; the corner follows the pointer.
/// The rectangle is always normalized, whichever way the drag goes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Marquee {
    anchor: Point,
    corner: Point,
}

impl Marquee {
    /// Start a drag at `anchor`. The rectangle has zero area until the first move.
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            corner: anchor,
        }
    }

    /// Where the drag started.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// The moving corner.
    pub fn corner(&self) -> Point {
        self.corner
    }

    /// Move the free corner to `p`.
    pub fn drag_to(&mut self, p: Point) {
        self.corner = p;
    }

    /// Normalized selection rectangle: left/top are the minimum coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.anchor, self.corner)
    }

    /// Horizontal extent of the drag.
    pub fn width(&self) -> f64 {
        self.rect().width()
    }

    /// Vertical extent of the drag.
    pub fn height(&self) -> f64 {
        self.rect().height()
    }
}
