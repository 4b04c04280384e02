// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{
    AttributeSet, DirectStyle, MatchOptions, PatternStyle, Resolved, RuleStyle, StyleGroup,
    StyleRule, TextTransform,
};

type Attrs = AttributeSet<&'static str, &'static str>;
type Group = StyleGroup<&'static str, &'static str>;

/// Reference implementation of group resolution.
///
/// This intentionally uses the simplest (and slowest) algorithm: collect every rule's spans,
/// then for each boundary segment scan all spans that overlap it and merge in application
/// order. The production path sweeps an active span set instead; this helper exists to assert
/// both produce identical semantics.
fn reference_resolve(group: &Group, text: &str) -> Vec<(Range<usize>, Attrs)> {
    let mut spans: Vec<(Range<usize>, Attrs)> = Vec::new();
    for rule in group.rules() {
        for (range, style) in rule.resolve(text) {
            spans.push((range, style.attributes));
        }
    }

    let mut boundaries = vec![0, text.len()];
    for (range, _) in &spans {
        boundaries.push(range.start);
        boundaries.push(range.end);
    }
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut out = Vec::new();
    for pair in boundaries.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        if start == end {
            continue;
        }
        let mut merged = AttributeSet::new();
        for (range, attrs) in &spans {
            if range.start < end && range.end > start {
                merged.merge_from(attrs);
            }
        }
        out.push((start..end, merged));
    }
    out
}

fn production_segments(resolved: &Resolved<'_, &'static str, &'static str>) -> Vec<(Range<usize>, Attrs)> {
    resolved
        .attributes()
        .map(|(r, a)| (r.clone(), a.clone()))
        .collect()
}

fn assert_partitions(resolved: &Resolved<'_, &'static str, &'static str>) {
    let mut cursor = 0;
    for span in resolved.segments() {
        assert_eq!(span.range.start, cursor, "segments must be contiguous");
        assert!(span.range.start < span.range.end, "segments must be non-empty");
        cursor = span.range.end;
    }
    assert_eq!(cursor, resolved.len(), "segments must cover the text");
}

fn word_rule() -> PatternStyle<&'static str, &'static str> {
    PatternStyle::with_base(
        AttributeSet::new().with("underline", "single"),
        r"\w+",
        MatchOptions::default(),
        |_| RuleStyle::new(AttributeSet::new().with("color", "red")),
    )
    .expect("valid pattern")
}

#[test]
fn words_get_base_plus_rule_attributes() {
    // text = "hello world", pattern = \w+, base {underline}, rule {color}.
    let group = Group::new().with_rule(word_rule());
    let resolved = group.resolve("hello world");
    assert_partitions(&resolved);

    let segments = resolved.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].range, 0..5);
    assert_eq!(segments[1].range, 5..6);
    assert_eq!(segments[2].range, 6..11);

    for word in [&segments[0], &segments[2]] {
        assert_eq!(word.attributes.get(&"underline"), Some(&"single"));
        assert_eq!(word.attributes.get(&"color"), Some(&"red"));
        assert_eq!(word.attributes.len(), 2);
    }
    assert!(segments[1].attributes.is_empty());
}

#[test]
fn direct_then_pattern_merges_per_key() {
    // group = [Direct(whole text, {font: A}), Pattern("world", {color: blue})].
    let group = Group::new()
        .with_rule(DirectStyle::new(AttributeSet::new().with("font", "A")))
        .with_rule(
            PatternStyle::new("world", MatchOptions::default(), |_| {
                RuleStyle::new(AttributeSet::new().with("color", "blue"))
            })
            .expect("valid pattern"),
        );
    let resolved = group.resolve("hello world");
    assert_partitions(&resolved);

    let segments = resolved.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].range, 0..6);
    assert_eq!(segments[0].attributes, AttributeSet::new().with("font", "A"));
    assert_eq!(segments[1].range, 6..11);
    assert_eq!(segments[1].attributes.get(&"font"), Some(&"A"));
    assert_eq!(segments[1].attributes.get(&"color"), Some(&"blue"));
}

#[test]
fn pattern_rule_ranges_match_the_engine() {
    let group = Group::new().with_rule(word_rule());
    let text = "one, two; three";
    let resolved = group.resolve(text);

    let engine = crate::CompiledPattern::compile(r"\w+", MatchOptions::default())
        .expect("valid pattern");
    let matches = engine.find_ranges(text);
    let styled: Vec<_> = resolved
        .attributes()
        .filter(|(_, a)| !a.is_empty())
        .map(|(r, _)| r.clone())
        .collect();
    assert_eq!(styled, matches);
}

#[test]
fn production_path_matches_reference() {
    let pangram = "the quick brown fox, 42 times";
    let cases: Vec<Group> = vec![
        Group::new(),
        Group::new().with_rule(word_rule()),
        Group::new()
            .with_rule(DirectStyle::new(AttributeSet::new().with("font", "A")))
            .with_rule(word_rule())
            .with_rule(
                PatternStyle::new(r"\d+", MatchOptions::default(), |_| {
                    RuleStyle::new(AttributeSet::new().with("color", "green"))
                })
                .expect("valid pattern"),
            ),
        Group::new()
            .with_rule(DirectStyle::over_range(
                AttributeSet::new().with("a", "1"),
                4..15,
            ))
            .with_rule(DirectStyle::over_range(
                AttributeSet::new().with("a", "2").with("b", "2"),
                10..20,
            )),
    ];

    for (i, group) in cases.iter().enumerate() {
        for text in ["", "x", pangram] {
            let resolved = group.resolve(text);
            assert_partitions(&resolved);
            assert_eq!(
                production_segments(&resolved),
                reference_resolve(group, text),
                "case {i} on {text:?}"
            );
        }
    }
}

#[test]
fn resolution_is_pure_and_repeatable() {
    let group = Group::new()
        .with_rule(DirectStyle::new(AttributeSet::new().with("font", "A")))
        .with_rule(word_rule());
    let text = "repeat me twice";
    let first = group.resolve(text);
    let second = group.resolve(text);
    assert_eq!(first, second);
}

#[test]
fn skipping_a_failed_rule_leaves_the_rest_working() {
    // A caller that drops unconstructible rules gets the remaining rules' effects.
    let mut group: StyleGroup<&str, &str> = StyleGroup::new();
    for pattern in ["(", r"\w+"] {
        if let Ok(rule) = PatternStyle::new(pattern, MatchOptions::default(), |_| {
            RuleStyle::new(AttributeSet::new().with("ok", "yes"))
        }) {
            group.push(rule);
        }
    }
    assert_eq!(group.len(), 1);
    let resolved = group.resolve("hi");
    assert_eq!(resolved.attributes_at(0).unwrap().get(&"ok"), Some(&"yes"));
}

#[test]
fn transformed_output_keeps_original_range_map() {
    let group: StyleGroup<&str, &str> = StyleGroup::new().with_rule(
        PatternStyle::new("world", MatchOptions::default(), |_| {
            RuleStyle::new(AttributeSet::new().with("color", "blue"))
                .with_transform(TextTransform::Uppercase)
        })
        .expect("valid pattern"),
    );
    let resolved = group.resolve("hello world");
    assert_eq!(resolved.text(), "hello WORLD");
    assert_eq!(resolved.original(), "hello world");
    assert_partitions(&resolved);
    assert_eq!(resolved.segments()[1].range, 6..11);
    assert_eq!(resolved.segments()[1].text, "WORLD");
}

#[test]
fn direct_rule_out_of_bounds_is_clamped() {
    let group = Group::new().with_rule(DirectStyle::over_range(
        AttributeSet::new().with("font", "A"),
        6..999,
    ));
    let resolved = group.resolve("hello world");
    assert_partitions(&resolved);
    assert_eq!(resolved.segments().len(), 2);
    assert_eq!(resolved.segments()[1].range, 6..11);
    assert_eq!(resolved.segments()[1].attributes.get(&"font"), Some(&"A"));
}

#[test]
fn case_insensitive_is_the_default_policy() {
    let group = Group::new().with_rule(
        PatternStyle::new("hello", MatchOptions::default(), |_| {
            RuleStyle::new(AttributeSet::new().with("hit", "yes"))
        })
        .expect("valid pattern"),
    );
    let resolved = group.resolve("HELLO there");
    assert_eq!(resolved.attributes_at(0).unwrap().get(&"hit"), Some(&"yes"));
}

#[test]
fn multibyte_text_resolves_on_char_boundaries() {
    let group = Group::new().with_rule(
        PatternStyle::new(r"\w+", MatchOptions::default(), |_| {
            RuleStyle::new(AttributeSet::new().with("color", "red"))
        })
        .expect("valid pattern"),
    );
    let text = "héllo wörld";
    let resolved = group.resolve(text);
    assert_partitions(&resolved);
    for span in resolved.segments() {
        assert!(text.is_char_boundary(span.range.start));
        assert!(text.is_char_boundary(span.range.end));
    }
}

#[test]
fn rules_can_be_boxed_into_an_enum_list() {
    let rules: Vec<StyleRule<&str, &str>> = vec![
        DirectStyle::new(AttributeSet::new().with("font", "A")).into(),
        word_rule().into(),
    ];
    let group: Group = rules.into_iter().collect();
    assert_eq!(group.len(), 2);
    let resolved = group.resolve("ok");
    assert_eq!(resolved.attributes_at(0).unwrap().len(), 3);
}
