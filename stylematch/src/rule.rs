// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::ops::Range;
use std::sync::Arc;

use attribute_set::AttributeSet;

use crate::pattern::{CompiledPattern, MatchOptions};
use crate::transform::TextTransform;
use crate::PatternError;

/// The style a rule contributes to one resolved range: attributes plus optional transforms.
#[derive(Clone, Debug)]
pub struct RuleStyle<K: Debug, V: Debug> {
    /// Attributes to merge onto the range.
    pub attributes: AttributeSet<K, V>,
    /// Text transforms to apply to the range's text, in order.
    pub transforms: Vec<TextTransform>,
}

impl<K: Debug, V: Debug> RuleStyle<K, V> {
    /// Creates a style contribution with no transforms.
    #[must_use]
    pub const fn new(attributes: AttributeSet<K, V>) -> Self {
        Self {
            attributes,
            transforms: Vec::new(),
        }
    }

    /// Builder-style transform addition; transforms apply in the order added.
    #[must_use]
    pub fn with_transform(mut self, transform: TextTransform) -> Self {
        self.transforms.push(transform);
        self
    }
}

impl<K: Debug, V: Debug> Default for RuleStyle<K, V> {
    fn default() -> Self {
        Self::new(AttributeSet::new())
    }
}

/// The context handed to a [`PatternStyle`] configuration handler for each match.
#[derive(Debug)]
pub struct MatchContext<'t> {
    text: &'t str,
    range: Range<usize>,
    captures: regex::Captures<'t>,
}

impl<'t> MatchContext<'t> {
    /// The full text being resolved.
    #[must_use]
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// The half-open byte range of this match.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The matched substring.
    #[must_use]
    pub fn matched(&self) -> &'t str {
        &self.text[self.range.clone()]
    }

    /// The text captured by numbered group `index`, if it participated in the match.
    ///
    /// Group `0` is the whole match.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&'t str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    /// The text captured by the group named `name`, if it participated in the match.
    #[must_use]
    pub fn named_group(&self, name: &str) -> Option<&'t str> {
        self.captures.name(name).map(|m| m.as_str())
    }
}

type StyleHandler<K, V> = dyn Fn(&MatchContext<'_>) -> RuleStyle<K, V> + Send + Sync;

/// A style applied wherever a pattern matches.
///
/// Holds a compiled pattern, an optional base attribute set applied to every matched range
/// before the rule's own attributes, and a configuration handler invoked once per match.
/// Construction compiles the pattern and fails with [`PatternError`] on malformed syntax;
/// a constructed rule is immutable and reusable across resolutions.
///
/// # Examples
///
/// ```
/// use stylematch::{AttributeSet, MatchOptions, PatternStyle, RuleStyle};
///
/// let rule = PatternStyle::new(r"\d+", MatchOptions::default(), |ctx| {
///     RuleStyle::new(AttributeSet::new().with("digits", ctx.matched().len()))
/// })
/// .unwrap();
///
/// let spans = rule.resolve("a 12 b 345");
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[0].0, 2..4);
/// assert_eq!(spans[1].1.attributes.get(&"digits"), Some(&3));
/// ```
pub struct PatternStyle<K: Debug, V: Debug> {
    pattern: CompiledPattern,
    base: Option<AttributeSet<K, V>>,
    handler: Arc<StyleHandler<K, V>>,
}

impl<K: Debug, V: Debug> PatternStyle<K, V> {
    /// Compiles `pattern` under `options` and builds a rule calling `handler` per match.
    pub fn new(
        pattern: &str,
        options: MatchOptions,
        handler: impl Fn(&MatchContext<'_>) -> RuleStyle<K, V> + Send + Sync + 'static,
    ) -> Result<Self, PatternError> {
        Ok(Self::from_compiled(
            CompiledPattern::compile(pattern, options)?,
            handler,
        ))
    }

    /// Like [`new`](Self::new), with a base attribute set applied to every matched range
    /// before the handler's attributes (the handler wins on key collision).
    pub fn with_base(
        base: AttributeSet<K, V>,
        pattern: &str,
        options: MatchOptions,
        handler: impl Fn(&MatchContext<'_>) -> RuleStyle<K, V> + Send + Sync + 'static,
    ) -> Result<Self, PatternError> {
        let mut rule = Self::new(pattern, options, handler)?;
        rule.base = Some(base);
        Ok(rule)
    }

    /// Builds a rule around an already-compiled pattern (e.g. one from a
    /// [`PatternCache`](crate::PatternCache)). Infallible.
    pub fn from_compiled(
        pattern: CompiledPattern,
        handler: impl Fn(&MatchContext<'_>) -> RuleStyle<K, V> + Send + Sync + 'static,
    ) -> Self {
        Self {
            pattern,
            base: None,
            handler: Arc::new(handler),
        }
    }

    /// The pattern text this rule matches.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The base attribute set, if any.
    #[must_use]
    pub fn base(&self) -> Option<&AttributeSet<K, V>> {
        self.base.as_ref()
    }
}

impl<K: Debug + Eq + Clone, V: Debug + Clone> PatternStyle<K, V> {
    /// Resolves this rule against `text`: one `(range, style)` pair per match, leftmost-first.
    ///
    /// Zero matches yield an empty sequence. Empty input yields no matches for non-empty
    /// patterns.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Vec<(Range<usize>, RuleStyle<K, V>)> {
        let mut out = Vec::new();
        for captures in self.pattern.captures_iter(text) {
            let range = captures
                .get(0)
                .expect("capture group 0 always participates")
                .range();
            let ctx = MatchContext {
                text,
                range: range.clone(),
                captures,
            };
            let style = (self.handler)(&ctx);
            let attributes = match &self.base {
                Some(base) => base.merge(&style.attributes),
                None => style.attributes,
            };
            out.push((
                range,
                RuleStyle {
                    attributes,
                    transforms: style.transforms,
                },
            ));
        }
        out
    }
}

impl<K: Debug, V: Debug> Debug for PatternStyle<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PatternStyle")
            .field("pattern", &self.pattern.as_str())
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

/// A fixed style applied to an explicit range, or to the whole text when no range is given.
///
/// Resolution cannot fail: a range that exceeds the text is clamped to `[0, len)` and snapped
/// down to UTF-8 character boundaries, and an inverted range collapses to empty at its clamped
/// start.
#[derive(Clone, Debug)]
pub struct DirectStyle<K: Debug, V: Debug> {
    attributes: AttributeSet<K, V>,
    transforms: Vec<TextTransform>,
    range: Option<Range<usize>>,
}

impl<K: Debug, V: Debug> DirectStyle<K, V> {
    /// A style covering the whole text.
    #[must_use]
    pub const fn new(attributes: AttributeSet<K, V>) -> Self {
        Self {
            attributes,
            transforms: Vec::new(),
            range: None,
        }
    }

    /// A style covering an explicit byte range.
    #[must_use]
    pub const fn over_range(attributes: AttributeSet<K, V>, range: Range<usize>) -> Self {
        Self {
            attributes,
            transforms: Vec::new(),
            range: Some(range),
        }
    }

    /// Builder-style transform addition; transforms apply in the order added.
    #[must_use]
    pub fn with_transform(mut self, transform: TextTransform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// The fixed attributes this rule applies.
    #[must_use]
    pub fn attributes(&self) -> &AttributeSet<K, V> {
        &self.attributes
    }

    /// The explicit range, if one was given.
    #[must_use]
    pub fn range(&self) -> Option<&Range<usize>> {
        self.range.as_ref()
    }
}

impl<K: Debug + Clone, V: Debug + Clone> DirectStyle<K, V> {
    /// Resolves this rule against `text`: always exactly one `(range, style)` pair.
    #[must_use]
    pub fn resolve(&self, text: &str) -> (Range<usize>, RuleStyle<K, V>) {
        let range = match &self.range {
            Some(range) => clamp_range(range, text),
            None => 0..text.len(),
        };
        (
            range,
            RuleStyle {
                attributes: self.attributes.clone(),
                transforms: self.transforms.clone(),
            },
        )
    }
}

/// A style rule: either a fixed range style or a pattern-driven style.
///
/// Both variants resolve to a sequence of `(range, style)` pairs over a given text.
#[derive(Debug)]
pub enum StyleRule<K: Debug, V: Debug> {
    /// A fixed attribute set on an explicit range or the whole text.
    Direct(DirectStyle<K, V>),
    /// A base + per-match attribute set on every pattern match.
    Pattern(PatternStyle<K, V>),
}

impl<K: Debug + Eq + Clone, V: Debug + Clone> StyleRule<K, V> {
    /// Resolves this rule against `text`.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Vec<(Range<usize>, RuleStyle<K, V>)> {
        match self {
            Self::Direct(direct) => vec![direct.resolve(text)],
            Self::Pattern(pattern) => pattern.resolve(text),
        }
    }
}

impl<K: Debug, V: Debug> From<DirectStyle<K, V>> for StyleRule<K, V> {
    fn from(value: DirectStyle<K, V>) -> Self {
        Self::Direct(value)
    }
}

impl<K: Debug, V: Debug> From<PatternStyle<K, V>> for StyleRule<K, V> {
    fn from(value: PatternStyle<K, V>) -> Self {
        Self::Pattern(value)
    }
}

/// Clamps `range` to `[0, len)` and snaps both endpoints down to char boundaries.
pub(crate) fn clamp_range(range: &Range<usize>, text: &str) -> Range<usize> {
    let mut start = range.start.min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = range.end.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    if end < start {
        end = start;
    }
    start..end
}
