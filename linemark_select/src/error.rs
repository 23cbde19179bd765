// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for canvas editing and shape generation.
//!
//! Selection itself never fails; these cover the editing operations around it.

use thiserror::Error;

use crate::canvas::DrawingMode;

/// Errors from placing points on a polyline.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PlaceError {
    /// The point equals the previously placed one and would make a zero-length segment.
    #[error("point ({x}, {y}) repeats the previous point")]
    DuplicatePoint {
        /// X coordinate of the rejected point.
        x: f64,
        /// Y coordinate of the rejected point.
        y: f64,
    },
}

/// Errors from validating a [`ShapeConfig`](crate::generate::ShapeConfig).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    /// The canvas has no area to place points in.
    #[error("canvas {width}x{height} has no area")]
    EmptyCanvas {
        /// Canvas width.
        width: f64,
        /// Canvas height.
        height: f64,
    },
    /// The point count range is empty.
    #[error("point range {min}..{max} is empty")]
    PointRange {
        /// Inclusive lower bound.
        min: usize,
        /// Exclusive upper bound.
        max: usize,
    },
    /// The closing probability is outside `[0, 1]`.
    #[error("closing probability {0} is outside [0, 1]")]
    Probability(f64),
}

/// Errors from [`Canvas`](crate::canvas::Canvas) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CanvasError {
    /// The operation is not available in the current drawing mode.
    #[error("operation requires {expected:?} mode, canvas is in {actual:?} mode")]
    WrongMode {
        /// Mode the operation needs.
        expected: DrawingMode,
        /// Mode the canvas is in.
        actual: DrawingMode,
    },
    /// Point placement failed.
    #[error(transparent)]
    Place(#[from] PlaceError),
}
