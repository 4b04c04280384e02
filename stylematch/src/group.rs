// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::ops::Range;
use std::borrow::Cow;

use attribute_set::{AttributeSet, RangedAttributes};

use crate::resolved::{Resolved, ResolvedSpan};
use crate::rule::{StyleRule, clamp_range};
use crate::transform::{TextTransform, apply_all};

/// An ordered sequence of style rules, applied in declaration order.
///
/// When several rules touch the same character, the later rule's attributes are merged on top
/// of the earlier rule's: per-attribute-key override, not per-range replacement.
///
/// Rules that failed to construct (pattern compile errors) are simply never added to the group;
/// `resolve` itself has no failure mode and is total over any input text.
///
/// # Examples
///
/// ```
/// use stylematch::{AttributeSet, DirectStyle, MatchOptions, PatternStyle, RuleStyle, StyleGroup};
///
/// let group = StyleGroup::new()
///     .with_rule(DirectStyle::new(AttributeSet::new().with("font", "A")))
///     .with_rule(
///         PatternStyle::new("world", MatchOptions::default(), |_| {
///             RuleStyle::new(AttributeSet::new().with("color", "blue"))
///         })
///         .unwrap(),
///     );
///
/// let resolved = group.resolve("hello world");
/// // The base font survives under the pattern's color.
/// let world = resolved.attributes_at(6).unwrap();
/// assert_eq!(world.get(&"font"), Some(&"A"));
/// assert_eq!(world.get(&"color"), Some(&"blue"));
/// ```
#[derive(Debug)]
pub struct StyleGroup<K: Debug, V: Debug> {
    rules: Vec<StyleRule<K, V>>,
}

impl<K: Debug, V: Debug> StyleGroup<K, V> {
    /// Creates an empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule; later rules override earlier ones on collision.
    pub fn push(&mut self, rule: impl Into<StyleRule<K, V>>) {
        self.rules.push(rule.into());
    }

    /// Builder-style rule addition.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<StyleRule<K, V>>) -> Self {
        self.push(rule);
        self
    }

    /// The number of rules in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the group holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in declaration order.
    pub fn rules(&self) -> impl ExactSizeIterator<Item = &StyleRule<K, V>> {
        self.rules.iter()
    }
}

impl<K: Debug + Eq + Clone, V: Debug + Clone> StyleGroup<K, V> {
    /// Resolves every rule against `text` and merges the results into a full coverage map.
    ///
    /// The output's segments partition `[0, len)`; see [`Resolved`]. For each segment whose
    /// winning rule declared text transforms, the transforms are applied to that segment's
    /// substring of the original text.
    #[must_use]
    pub fn resolve<'t>(&self, text: &'t str) -> Resolved<'t, K, V> {
        let mut spans = RangedAttributes::new(text.len());
        // Transform-bearing spans in application order; the last one active over a segment wins,
        // consistent with attribute merging.
        let mut transform_spans: Vec<(Range<usize>, Vec<TextTransform>)> = Vec::new();

        for rule in &self.rules {
            for (range, style) in rule.resolve(text) {
                let range = clamp_range(&range, text);
                if !style.transforms.is_empty() {
                    transform_spans.push((range.clone(), style.transforms));
                }
                spans.push(range, style.attributes);
            }
        }

        let segments = spans
            .resolve()
            .into_segments()
            .into_iter()
            .map(|(range, attributes)| {
                let raw = &text[range.clone()];
                let winning = transform_spans
                    .iter()
                    .rev()
                    .find(|(span, _)| span.start < range.end && span.end > range.start);
                let text = match winning {
                    Some((_, transforms)) => Cow::Owned(apply_all(transforms, raw)),
                    None => Cow::Borrowed(raw),
                };
                ResolvedSpan {
                    range,
                    text,
                    attributes,
                }
            })
            .collect();

        Resolved::new(text, segments)
    }
}

impl<K: Debug, V: Debug> Default for StyleGroup<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, R: Into<StyleRule<K, V>>> FromIterator<R> for StyleGroup<K, V> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// Convenience: resolve a single rule without building a group by hand.
impl<K: Debug, V: Debug> From<StyleRule<K, V>> for StyleGroup<K, V> {
    fn from(rule: StyleRule<K, V>) -> Self {
        Self { rules: vec![rule] }
    }
}
