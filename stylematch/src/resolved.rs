// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::ops::Range;
use std::borrow::Cow;

use attribute_set::AttributeSet;

/// One contiguous segment of a resolution result.
///
/// `range` indexes the *original* text; `text` is the segment's render text, owned only when a
/// transform rewrote it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSpan<'t, K: Debug, V: Debug> {
    /// The half-open byte range in the original text.
    pub range: Range<usize>,
    /// The (possibly transform-rewritten) text for this segment.
    pub text: Cow<'t, str>,
    /// The merged attributes for this segment.
    pub attributes: AttributeSet<K, V>,
}

/// The output of [`StyleGroup::resolve`](crate::StyleGroup::resolve).
///
/// Segments are contiguous, ordered, and exactly partition `[0, len)` of the original text;
/// segments no rule touched carry an empty [`AttributeSet`]. The render text is the
/// concatenation of the segment texts.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<'t, K: Debug, V: Debug> {
    original: &'t str,
    segments: Vec<ResolvedSpan<'t, K, V>>,
}

impl<'t, K: Debug, V: Debug> Resolved<'t, K, V> {
    pub(crate) fn new(original: &'t str, segments: Vec<ResolvedSpan<'t, K, V>>) -> Self {
        Self { original, segments }
    }

    /// The resolved segments in text order.
    #[must_use]
    pub fn segments(&self) -> &[ResolvedSpan<'t, K, V>] {
        &self.segments
    }

    /// Consumes the result, returning its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<ResolvedSpan<'t, K, V>> {
        self.segments
    }

    /// The original, untransformed input text.
    #[must_use]
    pub fn original(&self) -> &'t str {
        self.original
    }

    /// The length of the original text, in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Returns `true` if the original text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// The render text: the original with every segment's transforms applied.
    ///
    /// Borrows the original when no transform rewrote anything.
    #[must_use]
    pub fn text(&self) -> Cow<'t, str> {
        if self
            .segments
            .iter()
            .all(|s| matches!(s.text, Cow::Borrowed(_)))
        {
            return Cow::Borrowed(self.original);
        }
        let mut out = String::with_capacity(self.original.len());
        for span in &self.segments {
            out.push_str(&span.text);
        }
        Cow::Owned(out)
    }

    /// Iterates over the per-range attribute map.
    pub fn attributes(&self) -> impl Iterator<Item = (&Range<usize>, &AttributeSet<K, V>)> {
        self.segments.iter().map(|s| (&s.range, &s.attributes))
    }

    /// Returns the attribute set covering byte `index` of the original text, or `None` when
    /// `index >= len`.
    #[must_use]
    pub fn attributes_at(&self, index: usize) -> Option<&AttributeSet<K, V>> {
        if index >= self.original.len() {
            return None;
        }
        let ix = self
            .segments
            .partition_point(|span| span.range.start <= index);
        debug_assert!(ix > 0, "non-empty coverage starts at 0");
        Some(&self.segments[ix - 1].attributes)
    }
}
