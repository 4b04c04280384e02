// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pattern-driven style resolution built on [`attribute_set`].
//!
//! Given a text and an ordered group of style rules, this crate computes the final per-range
//! attribute map a text-rendering layer will apply:
//!
//! - [`DirectStyle`]: a fixed [`AttributeSet`] on an explicit range or the whole text.
//! - [`PatternStyle`]: a base [`AttributeSet`] plus a per-match configuration handler, applied
//!   to every non-overlapping match of a compiled pattern.
//! - [`StyleGroup`]: rules in priority order; later rules override earlier ones per
//!   attribute key, never per range.
//! - [`Resolved`]: contiguous segments exactly partitioning the input, each carrying its merged
//!   attributes and (possibly transform-rewritten) text.
//!
//! ## Scope
//!
//! The attribute vocabulary is the renderer's own: keys and values are opaque generics here.
//! Pattern matching is delegated to the `regex` crate; this crate only relies on ordered,
//! non-overlapping leftmost-first matches with forward progress past empty matches.
//!
//! ## Indices
//!
//! All ranges are half-open **byte ranges** into UTF-8 text. Ranges produced by pattern matches
//! are always on character boundaries; explicit [`DirectStyle`] ranges are clamped to the text
//! and snapped down to character boundaries rather than failing, so resolution is total.
//!
//! ## Errors
//!
//! The only failure in the system is [`PatternError`] at rule construction time, when a pattern
//! fails to compile. A group never holds such a rule (construction returns `Err` instead of a
//! rule), so a group containing only successfully built rules resolves without error; callers
//! wanting strict validation check construction results themselves.
//!
//! ## Example
//!
//! ```
//! use stylematch::{AttributeSet, MatchOptions, PatternStyle, RuleStyle, StyleGroup};
//!
//! let group = StyleGroup::new().with_rule(
//!     PatternStyle::with_base(
//!         AttributeSet::new().with("underline", "single"),
//!         r"\w+",
//!         MatchOptions::default(),
//!         |_| RuleStyle::new(AttributeSet::new().with("color", "red")),
//!     )
//!     .unwrap(),
//! );
//!
//! let resolved = group.resolve("hello world");
//! let ranges: Vec<_> = resolved.attributes().map(|(r, _)| r.clone()).collect();
//! assert_eq!(ranges, [0..5, 5..6, 6..11]);
//! assert_eq!(resolved.attributes_at(0).unwrap().get(&"color"), Some(&"red"));
//! assert!(resolved.attributes_at(5).unwrap().is_empty());
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cache;
mod error;
mod group;
mod pattern;
mod resolved;
mod rule;
mod transform;

#[cfg(test)]
mod tests;

pub use cache::PatternCache;
pub use error::PatternError;
pub use group::StyleGroup;
pub use pattern::{CompiledPattern, MatchOptions};
pub use resolved::{Resolved, ResolvedSpan};
pub use rule::{DirectStyle, MatchContext, PatternStyle, RuleStyle, StyleRule};
pub use transform::TextTransform;

pub use attribute_set::{AttributeSet, RangedAttributes, ResolvedAttributes};
