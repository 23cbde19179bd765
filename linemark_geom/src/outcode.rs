// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cohen–Sutherland region codes.

use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// Region of a point relative to a closed rectangle.
    ///
    /// An empty code means the point lies inside the rectangle or on its
    /// boundary. Y grows downward, so `TOP` is `y < y0`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Outcode: u8 {
        /// Left of the rectangle (`x < x0`).
        const LEFT   = 0b0000_0001;
        /// Right of the rectangle (`x > x1`).
        const RIGHT  = 0b0000_0010;
        /// Above the rectangle (`y < y0`).
        const TOP    = 0b0000_0100;
        /// Below the rectangle (`y > y1`).
        const BOTTOM = 0b0000_1000;
    }
}

impl Default for Outcode {
    fn default() -> Self {
        Self::empty()
    }
}

impl Outcode {
    /// Compute the region code of `p` relative to `rect`.
    ///
    /// `rect` is expected to be normalized.
    pub fn of(p: Point, rect: Rect) -> Self {
        let mut code = Self::empty();
        if p.x < rect.x0 {
            code |= Self::LEFT;
        } else if p.x > rect.x1 {
            code |= Self::RIGHT;
        }
        if p.y < rect.y0 {
            code |= Self::TOP;
        } else if p.y > rect.y1 {
            code |= Self::BOTTOM;
        }
        code
    }

    /// Whether the point lies inside the closed rectangle.
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}
