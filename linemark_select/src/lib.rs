// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linemark Select: incremental marquee selection of line segments.
//!
//! ## Overview
//!
//! This crate keeps the set of segments intersecting a selection rectangle as
//! the rectangle changes during a drag. Intersection is decided by
//! [`linemark_geom::intersects`]; this crate owns the bookkeeping around it.
//!
//! Instead of observable collections, every state change is reported as an
//! explicit list of [`SelectionEvent`]s. Callers apply those to whatever
//! highlight state they render.
//!
//! ## Pieces
//!
//! - [`SelectionTracker`]: the selection set and its add/remove diff.
//! - [`LineStore`]: ordered segments behind generational [`SegmentId`] handles.
//!   Segments are identified by handle, never by coordinates.
//! - [`Marquee`]: normalized rectangle from a drag anchor and a moving corner.
//! - [`PolylineBuilder`]: point-by-point shape construction.
//! - [`ShapeGenerator`](generate::ShapeGenerator): random shapes (feature `rand`).
//! - [`Canvas`]: a headless model tying the above together.
//!
//! ## Workflow
//!
//! 1) Build segments into a [`LineStore`] (directly, or through [`Canvas`]).
//! 2) On drag start create a [`Marquee`]; on every move call
//!    [`SelectionTracker::update`] with its rectangle and the store's segments.
//! 3) Apply `Added` / `Removed` events. Repeating an update with the same
//!    rectangle yields nothing.
//! 4) On release call [`SelectionTracker::clear`].
//!
//! Nothing here blocks or locks. The tracker is meant for one owner, usually
//! the thread handling pointer moves.
//!
//! ## Logging
//!
//! Selection updates, drags and batch inserts emit `tracing` events at
//! `debug`, and individual selection events at `trace`. No subscriber is
//! installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod canvas;
pub mod error;
#[cfg(feature = "rand")]
pub mod generate;
pub mod marquee;
pub mod polyline;
pub mod store;
pub mod tracker;

pub use canvas::{Canvas, DrawingMode};
pub use error::{CanvasError, PlaceError, ShapeError};
pub use marquee::Marquee;
pub use polyline::PolylineBuilder;
pub use store::{LineStore, SegmentId};
pub use tracker::{SelectionEvent, SelectionTracker};
