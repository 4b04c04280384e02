// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::PatternError;

/// Matching options for pattern compilation.
///
/// The default policy is case-insensitive matching; this is the explicit, named home of that
/// default rather than an implicit global. All other toggles default to off.
///
/// # Examples
///
/// ```
/// use stylematch::MatchOptions;
///
/// assert!(MatchOptions::default().case_insensitive);
/// let exact = MatchOptions {
///     case_insensitive: false,
///     ..MatchOptions::default()
/// };
/// assert!(!exact.case_insensitive);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    /// Match letters without regard to case. On by default.
    pub case_insensitive: bool,
    /// Let `^`/`$` match at line boundaries instead of text boundaries.
    pub multi_line: bool,
    /// Let `.` match `\n`.
    pub dot_matches_new_line: bool,
}

impl MatchOptions {
    /// The default options: case-insensitive, single-line.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case_insensitive: true,
            multi_line: false,
            dot_matches_new_line: false,
        }
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A pattern compiled once and reused across resolutions against different texts.
///
/// Cloning is cheap (the compiled program is reference-counted), and a compiled pattern may be
/// shared read-only across threads.
#[derive(Clone, Debug)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compiles `pattern` under `options`.
    ///
    /// Malformed syntax yields a [`PatternError`]; no usable pattern is produced in that case.
    pub fn compile(pattern: &str, options: MatchOptions) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line)
            .build()
            .map_err(|source| PatternError::new(pattern, source))?;
        Ok(Self { regex })
    }

    /// The pattern text this was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the ordered, non-overlapping match ranges in `text`, leftmost-first.
    ///
    /// The underlying engine guarantees forward progress past zero-length matches, so a pattern
    /// matching the empty string terminates and yields one empty range per position matched.
    #[must_use]
    pub fn find_ranges(&self, text: &str) -> Vec<Range<usize>> {
        self.regex.find_iter(text).map(|m| m.range()).collect()
    }

    pub(crate) fn captures_iter<'r, 't>(&'r self, text: &'t str) -> regex::CaptureMatches<'r, 't> {
        self.regex.captures_iter(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{CompiledPattern, MatchOptions};

    #[test]
    fn default_is_case_insensitive() {
        let pattern = CompiledPattern::compile("world", MatchOptions::default()).unwrap();
        let ranges: Vec<_> = pattern.find_ranges("Hello WORLD");
        assert_eq!(ranges, [6..11]);
    }

    #[test]
    fn case_sensitive_when_disabled() {
        let options = MatchOptions {
            case_insensitive: false,
            ..MatchOptions::default()
        };
        let pattern = CompiledPattern::compile("world", options).unwrap();
        assert_eq!(pattern.find_ranges("Hello WORLD").len(), 0);
        assert_eq!(pattern.find_ranges("Hello world").len(), 1);
    }

    #[test]
    fn unbalanced_group_fails_to_compile() {
        assert!(CompiledPattern::compile("(", MatchOptions::default()).is_err());
    }

    #[test]
    fn multi_line_anchors() {
        let options = MatchOptions {
            multi_line: true,
            ..MatchOptions::default()
        };
        let pattern = CompiledPattern::compile("^b$", options).unwrap();
        assert_eq!(pattern.find_ranges("a\nb\nc").len(), 1);
    }

    #[test]
    fn zero_length_matches_make_progress() {
        let pattern = CompiledPattern::compile("x*", MatchOptions::default()).unwrap();
        // The engine must progress past zero-length matches; this terminates and finds the
        // single non-empty run exactly once.
        let ranges: Vec<_> = pattern.find_ranges("axa");
        assert_eq!(ranges.iter().filter(|r| !r.is_empty()).count(), 1);
        assert!(ranges.contains(&(1..2)), "got: {ranges:?}");
    }
}
