// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed style attributes on text ranges.
//!
//! - [`AttributeSet`] is an insertion-ordered map from an opaque attribute key to an opaque
//!   value, with per-key override [`merge`](AttributeSet::merge) semantics.
//! - [`RangedAttributes`] collects `(Range, AttributeSet)` spans over a text of known length.
//! - [`ResolvedAttributes`] is the result of resolving those spans into contiguous,
//!   non-overlapping segments that exactly partition `[0, len)`.
//!
//! The key and value types are deliberately generic: the rendering layer supplies its own
//! attribute vocabulary and this crate never inspects it beyond equality of keys.
//!
//! All ranges are half-open byte ranges. This crate operates on lengths and offsets only and
//! never touches text content; callers are responsible for producing ranges that are valid for
//! their text (in particular, aligned to UTF-8 character boundaries).
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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
#![no_std]

extern crate alloc;

mod attribute_set;
mod coverage;

pub use crate::attribute_set::{AttributeSet, AttributeSetIter};
pub use crate::coverage::{RangedAttributes, ResolvedAttributes};
