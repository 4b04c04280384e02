// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::{Mutex, PoisonError};

use hashbrown::HashMap;

use crate::pattern::{CompiledPattern, MatchOptions};
use crate::PatternError;

/// A concurrency-safe cache of compiled patterns, keyed by pattern text and options.
///
/// The lock is held across compilation, so each key is compiled at most once even under
/// concurrent access. Cache hits hand out cheap clones of the compiled pattern.
///
/// # Examples
///
/// ```
/// use stylematch::{MatchOptions, PatternCache};
///
/// let cache = PatternCache::new();
/// let a = cache.get_or_compile(r"\w+", MatchOptions::default()).unwrap();
/// let b = cache.get_or_compile(r"\w+", MatchOptions::default()).unwrap();
/// assert_eq!(a.as_str(), b.as_str());
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: Mutex<HashMap<(Box<str>, MatchOptions), CompiledPattern>>,
}

impl PatternCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached pattern for `(pattern, options)`, compiling and caching it on first
    /// use. Compile failures are not cached and are reported on every call.
    pub fn get_or_compile(
        &self,
        pattern: &str,
        options: MatchOptions,
    ) -> Result<CompiledPattern, PatternError> {
        let mut patterns = self
            .patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(compiled) = patterns.get(&(Box::from(pattern), options)) {
            return Ok(compiled.clone());
        }
        let compiled = CompiledPattern::compile(pattern, options)?;
        patterns.insert((Box::from(pattern), options), compiled.clone());
        Ok(compiled)
    }

    /// The number of cached patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
