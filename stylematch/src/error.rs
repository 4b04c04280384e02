// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error produced when a style rule's pattern fails to compile.
///
/// This is raised at rule-construction time only; resolution itself cannot fail. Callers are
/// expected to treat it as a non-fatal configuration problem: skip or reject the offending rule
/// and carry on with the rest of the group.
#[derive(Clone, Debug)]
pub struct PatternError {
    pattern: Box<str>,
    source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: &str, source: regex::Error) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }

    /// The pattern text that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid pattern `{}`: {}", self.pattern, self.source)
    }
}

impl core::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}
