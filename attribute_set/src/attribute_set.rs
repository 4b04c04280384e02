// Copyright 2026 the Stylematch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;

/// An immutable-once-built mapping from attribute key to value.
///
/// Keys are unique within one set. Insertion order is preserved, which keeps iteration
/// deterministic and makes the set cheap for the handful of attributes a style typically
/// carries (entries are stored in a flat `Vec` and looked up by linear scan).
///
/// The merge operation implements the override policy used throughout resolution: every key in
/// `other` overwrites the same key in `self`, and keys present only in `self` survive.
///
/// # Examples
///
/// ```
/// use attribute_set::AttributeSet;
///
/// let base = AttributeSet::new().with("underline", "single");
/// let rule = AttributeSet::new()
///     .with("color", "red")
///     .with("underline", "double");
///
/// let merged = base.merge(&rule);
/// assert_eq!(merged.get(&"underline"), Some(&"double"));
/// assert_eq!(merged.get(&"color"), Some(&"red"));
/// assert_eq!(merged.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeSet<K: Debug, V: Debug> {
    entries: Vec<(K, V)>,
}

impl<K: Debug, V: Debug> AttributeSet<K, V> {
    /// Creates an empty attribute set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of attributes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Debug + Eq, V: Debug> AttributeSet<K, V> {
    /// Builder-style insertion; replaces the value for an existing key.
    #[must_use]
    pub fn with(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value for the key if there was one.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        for (existing, slot) in &mut self.entries {
            if *existing == key {
                return Some(core::mem::replace(slot, value));
            }
        }
        self.entries.push((key, value));
        None
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns `true` if the set holds a value for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K: Debug + Eq + Clone, V: Debug + Clone> AttributeSet<K, V> {
    /// Returns a new set where every key in `other` overwrites the same key in `self`.
    ///
    /// Keys present only in `self` are preserved. This is a pure value operation; neither
    /// operand is modified.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.merge_from(other);
        out
    }

    /// In-place variant of [`merge`](Self::merge): overlays `other` onto `self`.
    pub fn merge_from(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Debug, V: Debug> Default for AttributeSet<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug + Eq, V: Debug> FromIterator<(K, V)> for AttributeSet<K, V> {
    /// Collects pairs in order; a later pair overwrites an earlier pair with the same key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (key, value) in iter {
            out.insert(key, value);
        }
        out
    }
}

impl<'a, K: Debug, V: Debug> IntoIterator for &'a AttributeSet<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = AttributeSetIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        AttributeSetIter {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over the entries of an [`AttributeSet`] in insertion order.
#[derive(Clone, Debug)]
pub struct AttributeSetIter<'a, K: Debug, V: Debug> {
    inner: core::slice::Iter<'a, (K, V)>,
}

impl<'a, K: Debug, V: Debug> Iterator for AttributeSetIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Debug, V: Debug> ExactSizeIterator for AttributeSetIter<'_, K, V> {}
