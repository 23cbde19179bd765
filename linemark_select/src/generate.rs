// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random polyline generation for filling a canvas.
//!
//! Shapes are open or closed polylines through a random number of points with
//! integer coordinates inside the canvas. Generation only needs an [`Rng`], so
//! batches can be produced on several threads and merged into one
//! [`LineStore`](crate::store::LineStore) afterwards; merging is the caller's
//! job and must be serialized.
//!
//! ```
//! use kurbo::Size;
//! use linemark_select::generate::{ShapeConfig, ShapeGenerator};
//! use rand::SeedableRng;
//!
//! let generator = ShapeGenerator::new(ShapeConfig {
//!     canvas: Size::new(640.0, 480.0),
//!     ..Default::default()
//! })
//! .unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let lines = generator.shape(&mut rng);
//! assert!(lines.len() >= 2);
//! ```

use alloc::vec::Vec;

use kurbo::{Line, Point, Size};
use rand::Rng;

use crate::error::ShapeError;

/// Parameters for [`ShapeGenerator`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeConfig {
    /// Canvas extent; points fall in `[0, width) x [0, height)`.
    pub canvas: Size,
    /// Fewest points per shape (inclusive).
    pub min_points: usize,
    /// Most points per shape (exclusive).
    pub max_points: usize,
    /// Chance that a shape gets a segment joining its last point to its first.
    pub close_probability: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(800.0, 600.0),
            min_points: 3,
            max_points: 10,
            close_probability: 0.5,
        }
    }
}

impl ShapeConfig {
    /// Check that shapes can be generated with this configuration.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !(self.canvas.width >= 1.0 && self.canvas.height >= 1.0) {
            return Err(ShapeError::EmptyCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if self.min_points >= self.max_points {
            return Err(ShapeError::PointRange {
                min: self.min_points,
                max: self.max_points,
            });
        }
        if !(0.0..=1.0).contains(&self.close_probability) {
            return Err(ShapeError::Probability(self.close_probability));
        }
        Ok(())
    }
}

/// Produces random polylines for a validated [`ShapeConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeGenerator {
    config: ShapeConfig,
    width: u32,
    height: u32,
}

impl ShapeGenerator {
    /// Validate `config` and build a generator.
    pub fn new(config: ShapeConfig) -> Result<Self, ShapeError> {
        config.validate()?;
        Ok(Self {
            config,
            width: whole_units(config.canvas.width),
            height: whole_units(config.canvas.height),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    /// Random points for one shape, between `min_points` (inclusive) and
    /// `max_points` (exclusive) of them.
    pub fn random_points<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        let count = rng.gen_range(self.config.min_points..self.config.max_points);
        (0..count)
            .map(|_| {
                Point::new(
                    f64::from(rng.gen_range(0..self.width)),
                    f64::from(rng.gen_range(0..self.height)),
                )
            })
            .collect()
    }

    /// Join `points` into consecutive segments, closing the shape with
    /// probability `close_probability`.
    ///
    /// Fewer than two points produce no segments.
    pub fn polyline<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> Vec<Line> {
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return Vec::new();
        };
        if points.len() < 2 {
            return Vec::new();
        }
        let mut lines: Vec<Line> = points.windows(2).map(|w| Line::new(w[0], w[1])).collect();
        if rng.gen_bool(self.config.close_probability) {
            lines.push(Line::new(last, first));
        }
        lines
    }

    /// One random shape.
    pub fn shape<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Line> {
        let points = self.random_points(rng);
        self.polyline(&points, rng)
    }

    /// `count` random shapes, flattened in generation order.
    pub fn batch<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Line> {
        let mut out = Vec::new();
        for _ in 0..count {
            out.extend(self.shape(rng));
        }
        tracing::debug!(shapes = count, lines = out.len(), "generated shapes");
        out
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Validated canvas extents are at least 1; coordinates are whole units."
)]
fn whole_units(extent: f64) -> u32 {
    extent as u32
}
