// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection tracker: compute added/removed transitions as a marquee moves.
//!
//! ## Usage
//!
//! 1) Build the current selection rectangle (for example with [`Marquee`](crate::marquee::Marquee)).
//! 2) Call [`SelectionTracker::update`] with that rectangle and every segment on the canvas.
//! 3) Apply the returned `Added(..)` / `Removed(..)` events to your own highlight state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Line, Point, Rect};
//! use linemark_select::tracker::{SelectionEvent, SelectionTracker};
//!
//! let lines = [
//!     (1_u32, Line::new(Point::new(1.0, 4.0), Point::new(4.0, 4.0))),
//!     (2_u32, Line::new(Point::new(1.0, 1.0), Point::new(3.0, 1.0))),
//! ];
//! let mut t = SelectionTracker::new();
//! let rect = Rect::new(2.0, 2.0, 10.0, 10.0);
//! assert_eq!(t.update(rect, lines), vec![SelectionEvent::Added(1)]);
//! // Same rectangle again: nothing changes.
//! assert!(t.update(rect, lines).is_empty());
//! assert_eq!(t.clear(), vec![SelectionEvent::Removed(1)]);
//! ```

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Line, Rect};
use linemark_geom::intersects;

/// A selection transition event.
///
/// Returned by [`SelectionTracker::update`] and [`SelectionTracker::clear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionEvent<K> {
    /// The segment started intersecting the selection rectangle.
    Added(K),
    /// The segment stopped intersecting the selection rectangle, or left the canvas.
    Removed(K),
}

impl<K: Copy> SelectionEvent<K> {
    /// The segment this event is about.
    pub fn key(&self) -> K {
        match *self {
            Self::Added(k) | Self::Removed(k) => k,
        }
    }

    /// Whether the segment is selected after this event.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// The set of segments intersecting the current selection rectangle.
///
/// After every [`update`](Self::update) the set is exactly the segments of that
/// call whose geometry intersects the rectangle: no stale entries and no
/// duplicates. Members are kept in the order they were added.
///
/// The tracker holds no rendering state; callers observe changes only through
/// the returned events. It is meant for a single owner and does no locking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionTracker<K: Copy + Ord> {
    selected: Vec<K>,
    members: BTreeSet<K>,
}

impl<K: Copy + Ord + Debug> Default for SelectionTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Ord + Debug> SelectionTracker<K> {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
            members: BTreeSet::new(),
        }
    }

    /// Currently selected segments, in the order they were added.
    pub fn selected(&self) -> &[K] {
        &self.selected
    }

    /// Whether `key` is currently selected.
    pub fn contains(&self, key: K) -> bool {
        self.members.contains(&key)
    }

    /// Number of selected segments.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Re-evaluate every segment against `rect` and return the transitions.
    ///
    /// Segments are visited in the order given. A segment that now intersects
    /// and was not selected yields `Added`; one that no longer intersects and
    /// was selected yields `Removed`. Unchanged segments yield nothing, so a
    /// repeated call with the same inputs returns no events.
    ///
    /// Members that do not appear in `segments` at all are removed after the
    /// scan, in selection order. If a key appears more than once, only its
    /// first occurrence is evaluated.
    pub fn update<I>(&mut self, rect: Rect, segments: I) -> Vec<SelectionEvent<K>>
    where
        I: IntoIterator<Item = (K, Line)>,
    {
        let mut out = Vec::new();
        let mut seen = BTreeSet::new();
        for (key, line) in segments {
            if !seen.insert(key) {
                continue;
            }
            let hit = intersects(line, rect);
            let was = self.members.contains(&key);
            if hit && !was {
                self.members.insert(key);
                self.selected.push(key);
                out.push(SelectionEvent::Added(key));
            } else if !hit && was {
                self.members.remove(&key);
                out.push(SelectionEvent::Removed(key));
            }
        }

        // Drop keys that were deselected above or vanished from the input.
        let members = &mut self.members;
        self.selected.retain(|k| {
            if !members.contains(k) {
                return false;
            }
            if seen.contains(k) {
                return true;
            }
            members.remove(k);
            out.push(SelectionEvent::Removed(*k));
            false
        });

        if !out.is_empty() {
            tracing::debug!(
                selected = self.selected.len(),
                changes = out.len(),
                "selection updated"
            );
        }
        for ev in &out {
            tracing::trace!(?ev, "selection event");
        }
        out
    }

    /// Deselect a single segment, for example one deleted from the canvas.
    ///
    /// Returns `None` if it was not selected.
    pub fn remove(&mut self, key: K) -> Option<SelectionEvent<K>> {
        if !self.members.remove(&key) {
            return None;
        }
        self.selected.retain(|&k| k != key);
        Some(SelectionEvent::Removed(key))
    }

    /// Deselect everything, returning one `Removed` per previous member in
    /// selection order.
    ///
    /// Equivalent to an [`update`](Self::update) with a rectangle that
    /// intersects nothing.
    pub fn clear(&mut self) -> Vec<SelectionEvent<K>> {
        let out: Vec<_> = self
            .selected
            .drain(..)
            .map(SelectionEvent::Removed)
            .collect();
        self.members.clear();
        if !out.is_empty() {
            tracing::debug!(removed = out.len(), "selection cleared");
        }
        out
    }
}
