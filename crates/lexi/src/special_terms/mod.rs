//! Caller-supplied terms that are always emitted as a single token.
//!
//! # Matching
//!
//! Terms are folded with [`fold_case`] when the set is built, so matching is
//! case-insensitive against the (already folded) input. When several terms
//! are a prefix of the remaining input, the longest one wins. Terms of equal
//! length are ordered lexicographically, which only matters for identical
//! strings; those are deduplicated at construction, so every lookup has
//! exactly one answer regardless of how the caller's collection iterates.
//!
//! # Lookup
//!
//! Terms are bucketed by their first character. A lookup reads the next
//! input character, fetches that bucket, and walks it in priority order
//! (longest first) until one term is a prefix. Inputs whose next character
//! starts no term are rejected with a single hash probe.
//!
//! Empty terms are dropped: a zero-length match would produce a token that
//! consumes nothing.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::iter::Map;
use std::slice;

use rustc_hash::FxHashMap;

use crate::fold_case;

/// Immutable set of case-folded special terms.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct SpecialTerms {
    /// Folded, deduplicated terms in match priority order.
    terms: Vec<String>,
    /// Indices into `terms` keyed by first character, each in priority order.
    by_first_char: FxHashMap<char, Vec<usize>>,
}

/// Match priority: longer terms first, then lexicographic.
fn priority(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

impl SpecialTerms {
    /// Build a term set, folding every term to lowercase.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms: Vec<String> = terms
            .into_iter()
            .map(|term| fold_case(term.as_ref()))
            .filter(|term| !term.is_empty())
            .collect();
        terms.sort_by(|a, b| priority(a, b));
        terms.dedup();

        let mut by_first_char: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (index, term) in terms.iter().enumerate() {
            if let Some(first) = term.chars().next() {
                by_first_char.entry(first).or_default().push(index);
            }
        }

        Self {
            terms,
            by_first_char,
        }
    }

    /// Number of distinct (folded, non-empty) terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the set holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Folded terms in match priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.into_iter()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, term: &str) -> bool {
        let folded = fold_case(term);
        self.terms
            .binary_search_by(|probe| priority(probe, &folded))
            .is_ok()
    }

    /// The highest-priority term that `text` starts with.
    ///
    /// `text` must already be folded. The returned term is a prefix of
    /// `text`, so its byte length is a valid advance for a cursor over it.
    pub fn longest_prefix_of(&self, text: &str) -> Option<&str> {
        let first = text.chars().next()?;
        let bucket = self.by_first_char.get(&first)?;
        bucket
            .iter()
            .map(|&index| self.terms[index].as_str())
            .find(|term| text.starts_with(term))
    }
}

impl PartialEq for SpecialTerms {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for SpecialTerms {}

impl<S: AsRef<str>> FromIterator<S> for SpecialTerms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a SpecialTerms {
    type Item = &'a str;
    type IntoIter = Map<slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl From<Vec<String>> for SpecialTerms {
    fn from(terms: Vec<String>) -> Self {
        Self::new(terms)
    }
}

impl<S: AsRef<str>, H> From<HashSet<S, H>> for SpecialTerms {
    fn from(terms: HashSet<S, H>) -> Self {
        Self::new(terms)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for SpecialTerms {
    fn from(terms: [S; N]) -> Self {
        Self::new(terms)
    }
}

impl From<SpecialTerms> for Vec<String> {
    fn from(terms: SpecialTerms) -> Self {
        terms.terms
    }
}
