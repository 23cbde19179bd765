// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless drawing canvas: segments, point placement, and marquee selection.
//!
//! [`Canvas`] keeps the state a drawing surface needs between pointer events.
//! It does not receive events itself; the caller translates presses, moves and
//! releases into the calls below and applies the returned selection events to
//! its own highlighting.
//!
//! ```
//! use kurbo::Point;
//! use linemark_select::canvas::{Canvas, DrawingMode};
//!
//! let mut canvas = Canvas::new();
//! for p in [(100.0, 400.0), (400.0, 400.0), (250.0, 600.0)] {
//!     canvas.place_point(Point::from(p)).unwrap();
//! }
//! canvas.close_shape().unwrap();
//!
//! canvas.set_mode(DrawingMode::Selecting);
//! canvas.begin_selection(Point::new(150.0, 100.0)).unwrap();
//! let events = canvas.drag_to(Point::new(700.0, 700.0));
//! assert_eq!(events.len(), 3);
//! assert_eq!(canvas.selection().len(), 3);
//! ```

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

use crate::error::CanvasError;
use crate::marquee::Marquee;
use crate::polyline::PolylineBuilder;
use crate::store::{LineStore, SegmentId};
use crate::tracker::{SelectionEvent, SelectionTracker};

/// What a primary press on the canvas does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawingMode {
    /// Presses place points and extend the current polyline.
    #[default]
    PlacingPoints,
    /// Presses start a marquee selection.
    Selecting,
}

/// Canvas state: all segments, the shape being drawn, and the selection.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    mode: DrawingMode,
    lines: LineStore,
    pending: PolylineBuilder,
    selection: SelectionTracker<SegmentId>,
    marquee: Option<Marquee>,
}

impl Canvas {
    /// Create an empty canvas in [`DrawingMode::PlacingPoints`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drawing mode.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Switch drawing mode. Pending points and an active drag are kept.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    /// All segments on the canvas.
    pub fn lines(&self) -> &LineStore {
        &self.lines
    }

    /// Points of the polyline being drawn.
    pub fn pending_points(&self) -> &[Point] {
        self.pending.points()
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionTracker<SegmentId> {
        &self.selection
    }

    /// The active marquee rectangle, if a drag is in progress.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.marquee.map(|m| m.rect())
    }

    /// Place a point of the current polyline.
    ///
    /// Returns the id of the new segment, or `None` for the first point.
    pub fn place_point(&mut self, p: Point) -> Result<Option<SegmentId>, CanvasError> {
        self.expect_mode(DrawingMode::PlacingPoints)?;
        let line = self.pending.place(p)?;
        Ok(line.map(|line| self.lines.insert(line)))
    }

    /// Finish the current polyline, adding its closing segment when it has one.
    pub fn close_shape(&mut self) -> Result<Option<SegmentId>, CanvasError> {
        self.expect_mode(DrawingMode::PlacingPoints)?;
        Ok(self.pending.close().map(|line| self.lines.insert(line)))
    }

    /// Start a marquee drag at `p`, replacing any drag in progress.
    ///
    /// The existing selection is kept until the first [`drag_to`](Self::drag_to).
    pub fn begin_selection(&mut self, p: Point) -> Result<(), CanvasError> {
        self.expect_mode(DrawingMode::Selecting)?;
        tracing::debug!(x = p.x, y = p.y, "selection drag started");
        self.marquee = Some(Marquee::new(p));
        Ok(())
    }

    /// Move the marquee corner to `p` and reselect.
    ///
    /// Returns no events when no drag is in progress.
    pub fn drag_to(&mut self, p: Point) -> Vec<SelectionEvent<SegmentId>> {
        let Some(marquee) = self.marquee.as_mut() else {
            return Vec::new();
        };
        marquee.drag_to(p);
        let rect = marquee.rect();
        self.selection.update(rect, self.lines.iter())
    }

    /// Finish the drag: the rectangle is discarded and the selection cleared.
    pub fn end_selection(&mut self) -> Vec<SelectionEvent<SegmentId>> {
        if self.marquee.take().is_some() {
            tracing::debug!("selection drag ended");
        }
        self.selection.clear()
    }

    /// Add a batch of segments, such as generated shapes.
    ///
    /// When a drag is in progress the selection is re-evaluated so that new
    /// segments under the marquee are picked up.
    pub fn add_lines<I>(&mut self, lines: I) -> (Vec<SegmentId>, Vec<SelectionEvent<SegmentId>>)
    where
        I: IntoIterator<Item = Line>,
    {
        let ids = self.lines.extend(lines);
        let events = match self.marquee {
            Some(m) => self.selection.update(m.rect(), self.lines.iter()),
            None => Vec::new(),
        };
        tracing::debug!(added = ids.len(), total = self.lines.len(), "lines added");
        (ids, events)
    }

    /// Remove one segment, dropping it from the selection.
    pub fn remove_line(&mut self, id: SegmentId) -> (Option<Line>, Vec<SelectionEvent<SegmentId>>) {
        let removed = self.lines.remove(id);
        let events = self.selection.remove(id).into_iter().collect();
        (removed, events)
    }

    /// Remove every segment, pending point, and the selection.
    ///
    /// The drawing mode is kept.
    pub fn clear(&mut self) -> Vec<SelectionEvent<SegmentId>> {
        tracing::debug!(lines = self.lines.len(), "canvas cleared");
        self.pending.clear();
        self.marquee = None;
        let events = self.selection.clear();
        self.lines.clear();
        events
    }

    fn expect_mode(&self, expected: DrawingMode) -> Result<(), CanvasError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(CanvasError::WrongMode {
                expected,
                actual: self.mode,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaceError;
    use alloc::vec;

    fn triangle_canvas() -> (Canvas, Vec<SegmentId>) {
        let mut c = Canvas::new();
        let mut ids = Vec::new();
        for p in [(100.0, 400.0), (400.0, 400.0), (250.0, 600.0)] {
            ids.extend(c.place_point(Point::from(p)).unwrap());
        }
        ids.extend(c.close_shape().unwrap());
        (c, ids)
    }

    #[test]
    fn placing_points_builds_closed_triangle() {
        let (c, ids) = triangle_canvas();
        assert_eq!(ids.len(), 3);
        assert_eq!(c.lines().len(), 3);
        assert!(c.pending_points().is_empty());
    }

    // Drag from (150, 100) to (700, 700) over the triangle selects all sides.
    #[test]
    fn marquee_over_triangle_selects_three() {
        let (mut c, ids) = triangle_canvas();
        c.set_mode(DrawingMode::Selecting);
        c.begin_selection(Point::new(150.0, 100.0)).unwrap();
        assert_eq!(c.selection_rect(), Some(Rect::new(150.0, 100.0, 150.0, 100.0)));
        let ev = c.drag_to(Point::new(700.0, 700.0));
        assert_eq!(ev.len(), 3);
        assert_eq!(c.selection().selected(), ids.as_slice());
        // Same position again: nothing new.
        assert!(c.drag_to(Point::new(700.0, 700.0)).is_empty());
    }

    #[test]
    fn ending_drag_clears_selection_and_rect() {
        let (mut c, ids) = triangle_canvas();
        c.set_mode(DrawingMode::Selecting);
        c.begin_selection(Point::new(150.0, 100.0)).unwrap();
        let _ = c.drag_to(Point::new(700.0, 700.0));
        let ev = c.end_selection();
        assert_eq!(
            ev,
            ids.iter().map(|&id| SelectionEvent::Removed(id)).collect::<Vec<_>>()
        );
        assert!(c.selection().is_empty());
        assert_eq!(c.selection_rect(), None);
        // Moving after release does nothing.
        assert!(c.drag_to(Point::new(10.0, 10.0)).is_empty());
    }

    #[test]
    fn modes_gate_operations() {
        let mut c = Canvas::new();
        assert_eq!(
            c.begin_selection(Point::ZERO),
            Err(CanvasError::WrongMode {
                expected: DrawingMode::Selecting,
                actual: DrawingMode::PlacingPoints
            })
        );
        c.set_mode(DrawingMode::Selecting);
        assert!(matches!(
            c.place_point(Point::ZERO),
            Err(CanvasError::WrongMode { .. })
        ));
    }

    #[test]
    fn duplicate_point_surfaces_as_canvas_error() {
        let mut c = Canvas::new();
        c.place_point(Point::new(1.0, 2.0)).unwrap();
        assert_eq!(
            c.place_point(Point::new(1.0, 2.0)),
            Err(CanvasError::Place(PlaceError::DuplicatePoint { x: 1.0, y: 2.0 }))
        );
        assert!(c.lines().is_empty());
    }

    // Lines added during a drag are picked up immediately.
    #[test]
    fn added_lines_join_active_selection() {
        let (mut c, _) = triangle_canvas();
        c.set_mode(DrawingMode::Selecting);
        c.begin_selection(Point::new(0.0, 0.0)).unwrap();
        let _ = c.drag_to(Point::new(50.0, 50.0));
        assert!(c.selection().is_empty());

        let inside = Line::new(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
        let outside = Line::new(Point::new(60.0, 60.0), Point::new(90.0, 60.0));
        let (ids, ev) = c.add_lines([inside, outside]);
        assert_eq!(ev, vec![SelectionEvent::Added(ids[0])]);
        assert_eq!(c.lines().len(), 5);
    }

    #[test]
    fn added_lines_without_drag_emit_nothing() {
        let mut c = Canvas::new();
        let (ids, ev) = c.add_lines([Line::new(Point::ZERO, Point::new(1.0, 1.0))]);
        assert_eq!(ids.len(), 1);
        assert!(ev.is_empty());
    }

    #[test]
    fn removing_selected_line_deselects_it() {
        let (mut c, ids) = triangle_canvas();
        c.set_mode(DrawingMode::Selecting);
        c.begin_selection(Point::new(150.0, 100.0)).unwrap();
        let _ = c.drag_to(Point::new(700.0, 700.0));
        let (line, ev) = c.remove_line(ids[1]);
        assert!(line.is_some());
        assert_eq!(ev, vec![SelectionEvent::Removed(ids[1])]);
        assert_eq!(c.selection().selected(), &[ids[0], ids[2]]);
    }

    #[test]
    fn clear_empties_everything_but_mode() {
        let (mut c, _) = triangle_canvas();
        c.set_mode(DrawingMode::Selecting);
        c.begin_selection(Point::new(150.0, 100.0)).unwrap();
        let _ = c.drag_to(Point::new(700.0, 700.0));
        let ev = c.clear();
        assert_eq!(ev.len(), 3);
        assert!(c.lines().is_empty());
        assert!(c.selection().is_empty());
        assert_eq!(c.selection_rect(), None);
        assert_eq!(c.mode(), DrawingMode::Selecting);
    }
}
