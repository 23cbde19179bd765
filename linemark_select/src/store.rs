// Copyright 2025 the Linemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered segment storage with generational handles.

use alloc::vec::Vec;

use kurbo::Line;

/// Handle of a segment in a [`LineStore`].
///
/// Segments are identified by handle, not by coordinates: two segments with
/// the same endpoints have distinct ids.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `SegmentId` for that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct id.
///
/// The `Ord` implementation (slot, then generation) exists so ids can live in
/// ordered sets; it carries no meaning about insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(u32, u32);

impl SegmentId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Segment ids are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    line: Option<Line>,
}

/// An ordered collection of line segments.
///
/// Iteration yields segments in insertion order. Removing a segment keeps the
/// relative order of the rest.
#[derive(Clone, Debug, Default)]
pub struct LineStore {
    entries: Vec<Entry>,
    free_list: Vec<usize>,
    order: Vec<SegmentId>,
}

impl LineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live segments.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no segments.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append a segment. Returns its handle.
    pub fn insert(&mut self, line: Line) -> SegmentId {
        let id = if let Some(idx) = self.free_list.pop() {
            let entry = &mut self.entries[idx];
            entry.generation += 1;
            entry.line = Some(line);
            SegmentId::new(idx, entry.generation)
        } else {
            self.entries.push(Entry {
                generation: 1,
                line: Some(line),
            });
            SegmentId::new(self.entries.len() - 1, 1)
        };
        self.order.push(id);
        id
    }

    /// Append a batch of segments, returning their handles in the same order.
    pub fn extend<I>(&mut self, lines: I) -> Vec<SegmentId>
    where
        I: IntoIterator<Item = Line>,
    {
        lines.into_iter().map(|line| self.insert(line)).collect()
    }

    /// Remove a segment. Returns `None` if `id` is stale.
    pub fn remove(&mut self, id: SegmentId) -> Option<Line> {
        let entry = self.entries.get_mut(id.idx())?;
        if entry.generation != id.1 {
            return None;
        }
        let line = entry.line.take()?;
        self.free_list.push(id.idx());
        self.order.retain(|&k| k != id);
        Some(line)
    }

    /// Look up a live segment.
    pub fn get(&self, id: SegmentId) -> Option<Line> {
        let entry = self.entries.get(id.idx())?;
        if entry.generation != id.1 {
            return None;
        }
        entry.line
    }

    /// Whether `id` refers to a live segment.
    pub fn is_alive(&self, id: SegmentId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate `(id, segment)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, Line)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.get(id).map(|line| (id, line)))
    }

    /// Remove every segment.
    ///
    /// Slots are kept for reuse so that old ids stay stale.
    pub fn clear(&mut self) {
        for id in self.order.drain(..) {
            let entry = &mut self.entries[id.idx()];
            entry.line = None;
            self.free_list.push(id.idx());
        }
    }
}
