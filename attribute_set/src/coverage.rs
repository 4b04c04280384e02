// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span collection and coverage resolution.
//!
//! [`RangedAttributes`] accumulates possibly-overlapping `(Range, AttributeSet)` spans in
//! application order. [`RangedAttributes::resolve`] sweeps the span boundaries and produces a
//! [`ResolvedAttributes`]: contiguous, ordered segments exactly partitioning `[0, len)`, each
//! carrying the merge of every span active over it (later spans override earlier ones per key).

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::AttributeSet;

/// Possibly-overlapping attribute spans over a text of known length.
///
/// Spans are recorded in application order; that order decides the override winner on key
/// collisions during [`resolve`](Self::resolve).
///
/// # Examples
///
/// ```
/// use attribute_set::{AttributeSet, RangedAttributes};
///
/// let mut spans = RangedAttributes::new(11);
/// spans.push(0..11, AttributeSet::new().with("font", "A"));
/// spans.push(6..11, AttributeSet::new().with("color", "blue"));
///
/// let resolved = spans.resolve();
/// let segments: Vec<_> = resolved.segments().to_vec();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].0, 0..6);
/// assert_eq!(segments[1].0, 6..11);
/// // Per-key merge: "font" survives under the overriding span.
/// assert_eq!(segments[1].1.get(&"font"), Some(&"A"));
/// assert_eq!(segments[1].1.get(&"color"), Some(&"blue"));
/// ```
#[derive(Clone, Debug)]
pub struct RangedAttributes<K: Debug, V: Debug> {
    len: usize,
    spans: Vec<(Range<usize>, AttributeSet<K, V>)>,
}

impl<K: Debug, V: Debug> RangedAttributes<K, V> {
    /// Creates an empty span collection over a text of `len` bytes.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            spans: Vec::new(),
        }
    }

    /// Records a span. Later spans win per-key over earlier ones on overlap.
    ///
    /// The range must satisfy `start <= end <= len`; callers are expected to clamp
    /// before pushing.
    pub fn push(&mut self, range: Range<usize>, attributes: AttributeSet<K, V>) {
        debug_assert!(
            range.start <= range.end && range.end <= self.len,
            "span {}..{} out of bounds for len {}",
            range.start,
            range.end,
            self.len
        );
        self.spans.push((range, attributes));
    }

    /// The length of the covered text, in bytes.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.len
    }

    /// The number of recorded spans.
    #[must_use]
    pub fn spans_len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if no spans have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterates over the recorded spans in application order.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &AttributeSet<K, V>)> {
        self.spans.iter().map(|(range, attrs)| (range, attrs))
    }
}

impl<K: Debug + Eq + Clone, V: Debug + Clone> RangedAttributes<K, V> {
    /// Resolves the spans into contiguous segments covering `[0, len)`.
    ///
    /// Uncovered segments carry an empty [`AttributeSet`]. Zero-length spans contribute no
    /// attributes, but their boundaries still split segments.
    #[must_use]
    pub fn resolve(&self) -> ResolvedAttributes<K, V> {
        // Each span can contribute up to two boundaries (start/end), plus the implicit 0/len.
        let mut boundaries = Vec::with_capacity(2 + self.spans.len().saturating_mul(2));
        boundaries.push(0);
        boundaries.push(self.len);
        for (range, _) in &self.spans {
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let boundary_count = boundaries.len();

        // Start/end event lists keyed by boundary index, in CSR (Compressed Sparse Row) layout:
        // one flat event buffer per direction plus an offsets array giving the slice for each
        // boundary. This represents "many small lists" without per-boundary heap allocations.
        let mut span_boundaries = Vec::with_capacity(self.spans.len());
        let mut start_counts = vec![0_usize; boundary_count];
        let mut end_counts = vec![0_usize; boundary_count];
        for (id, (range, _)) in self.spans.iter().enumerate() {
            if range.start == range.end {
                continue;
            }
            let start_boundary = boundaries
                .binary_search(&range.start)
                .expect("span boundary start should be in boundary list");
            let end_boundary = boundaries
                .binary_search(&range.end)
                .expect("span boundary end should be in boundary list");

            span_boundaries.push((id, start_boundary, end_boundary));
            start_counts[start_boundary] += 1;
            end_counts[end_boundary] += 1;
        }

        let mut start_offsets = vec![0_usize; boundary_count + 1];
        let mut end_offsets = vec![0_usize; boundary_count + 1];
        for i in 0..boundary_count {
            start_offsets[i + 1] = start_offsets[i] + start_counts[i];
            end_offsets[i + 1] = end_offsets[i] + end_counts[i];
        }

        let mut start_events = vec![0_usize; start_offsets[boundary_count]];
        let mut end_events = vec![0_usize; end_offsets[boundary_count]];

        // Reuse `*_counts` as per-boundary write cursors while filling the CSR buffers.
        start_counts.fill(0);
        end_counts.fill(0);
        for &(id, start_boundary, end_boundary) in &span_boundaries {
            let start_ix = start_offsets[start_boundary] + start_counts[start_boundary];
            start_events[start_ix] = id;
            start_counts[start_boundary] += 1;

            let end_ix = end_offsets[end_boundary] + end_counts[end_boundary];
            end_events[end_ix] = id;
            end_counts[end_boundary] += 1;
        }

        // Sweep: maintain the active span ids sorted ascending, i.e. in application order.
        let mut active: Vec<usize> = Vec::with_capacity(span_boundaries.len());
        let mut segments = Vec::with_capacity(boundary_count.saturating_sub(1));
        for i in 0..boundary_count.saturating_sub(1) {
            for &id in &end_events[end_offsets[i]..end_offsets[i + 1]] {
                if let Ok(ix) = active.binary_search(&id) {
                    active.remove(ix);
                }
            }
            for &id in &start_events[start_offsets[i]..start_offsets[i + 1]] {
                if let Err(ix) = active.binary_search(&id) {
                    active.insert(ix, id);
                }
            }

            let start = boundaries[i];
            let end = boundaries[i + 1];
            debug_assert!(start < end, "boundaries are sorted + deduped");

            let mut merged = AttributeSet::new();
            for &id in &active {
                merged.merge_from(&self.spans[id].1);
            }
            segments.push((start..end, merged));
        }

        ResolvedAttributes {
            len: self.len,
            segments,
        }
    }
}

/// The output of [`RangedAttributes::resolve`]: a per-range attribute map.
///
/// Segments are contiguous, ordered, and exactly partition `[0, len)`. An uncovered segment
/// carries an empty [`AttributeSet`]. An empty text has no segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAttributes<K: Debug, V: Debug> {
    len: usize,
    segments: Vec<(Range<usize>, AttributeSet<K, V>)>,
}

impl<K: Debug, V: Debug> ResolvedAttributes<K, V> {
    /// The resolved segments in text order.
    #[must_use]
    pub fn segments(&self) -> &[(Range<usize>, AttributeSet<K, V>)] {
        &self.segments
    }

    /// Consumes the map, returning its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<(Range<usize>, AttributeSet<K, V>)> {
        self.segments
    }

    /// The length of the covered text, in bytes.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.len
    }

    /// Returns the attribute set covering byte `index`, or `None` when `index >= len`.
    #[must_use]
    pub fn attributes_at(&self, index: usize) -> Option<&AttributeSet<K, V>> {
        if index >= self.len {
            return None;
        }
        // Segments partition [0, len), so the last segment starting at or before `index`
        // contains it.
        let ix = self
            .segments
            .partition_point(|(range, _)| range.start <= index);
        debug_assert!(ix > 0, "non-empty coverage starts at 0");
        Some(&self.segments[ix - 1].1)
    }
}

impl<K: Debug + PartialEq, V: Debug + PartialEq> ResolvedAttributes<K, V> {
    /// Merges adjacent segments whose attribute sets compare equal.
    ///
    /// The result still partitions `[0, len)`.
    #[must_use]
    pub fn coalesced(self) -> Self {
        let mut out: Vec<(Range<usize>, AttributeSet<K, V>)> =
            Vec::with_capacity(self.segments.len());
        for (range, attrs) in self.segments {
            match out.last_mut() {
                Some((last_range, last_attrs))
                    if last_range.end == range.start && *last_attrs == attrs =>
                {
                    last_range.end = range.end;
                }
                _ => out.push((range, attrs)),
            }
        }
        Self {
            len: self.len,
            segments: out,
        }
    }
}
