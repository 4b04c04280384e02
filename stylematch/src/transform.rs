// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

/// A pure rewrite of matched text, applied at render-preparation time.
///
/// Transforms configured on a rule are applied in declaration order, each exactly once per
/// resolved range. They rewrite only the reported segment text; the attribute range map always
/// indexes the original text. The built-in case transforms preserve length for ASCII input, but
/// a handful of Unicode case mappings expand (e.g. `ß` uppercases to `SS`) and [`Custom`]
/// transforms may change length freely — neither re-anchors subsequent ranges.
///
/// [`Custom`]: TextTransform::Custom
///
/// # Examples
///
/// ```
/// use stylematch::TextTransform;
///
/// assert_eq!(TextTransform::Uppercase.apply("hello"), "HELLO");
/// assert_eq!(TextTransform::Capitalized.apply("heLLo woRLD"), "Hello World");
/// ```
#[derive(Clone)]
pub enum TextTransform {
    /// Uppercases every character.
    Uppercase,
    /// Lowercases every character.
    Lowercase,
    /// Uppercases the first character of each whitespace-separated word and lowercases the rest.
    Capitalized,
    /// A caller-supplied rewrite.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl TextTransform {
    /// Applies this transform to `text`, producing the rewritten string.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
            Self::Capitalized => capitalize_words(text),
            Self::Custom(f) => f(text),
        }
    }
}

impl core::fmt::Debug for TextTransform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Uppercase => f.write_str("Uppercase"),
            Self::Lowercase => f.write_str("Lowercase"),
            Self::Capitalized => f.write_str("Capitalized"),
            Self::Custom(_) => f.debug_tuple("Custom").finish_non_exhaustive(),
        }
    }
}

/// Applies `transforms` in order to `text`.
pub(crate) fn apply_all(transforms: &[TextTransform], text: &str) -> String {
    let mut out = String::from(text);
    for transform in transforms {
        out = transform.apply(&out);
    }
    out
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
