//! Approximate substring containment.
//!
//! A needle matches when it occurs in the haystack as a plain
//! case-insensitive substring. Needles of at least `min_typo_len` characters
//! also match when a substring of the haystack that starts at a word start is
//! within `max_edits` Levenshtein edits of the needle. So `bronse` still
//! finds "Bronze Bar", while `iron` does not find it through "bron" and a
//! short abbreviation like `str` must appear verbatim.

use serde::{Deserialize, Serialize};

/// Fuzzy containment settings (the `[fuzzy]` table of the config file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyMatcher {
    /// Edits tolerated between the needle and a haystack substring.
    pub max_edits: usize,
    /// Shortest needle (in chars) for which edits are tolerated.
    pub min_typo_len: usize,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            max_edits: 1,
            min_typo_len: 5,
        }
    }
}

impl FuzzyMatcher {
    /// Matcher that only accepts exact substrings.
    pub fn exact() -> Self {
        Self {
            max_edits: 0,
            ..Self::default()
        }
    }

    /// Check whether `haystack` contains `needle`, ignoring case and
    /// tolerating the configured number of edits.
    pub fn contains(&self, haystack: &str, needle: &str) -> bool {
        let haystack = haystack.to_lowercase();
        let needle = needle.to_lowercase();

        if haystack.contains(&needle) {
            return true;
        }

        let needle: Vec<char> = needle.chars().collect();
        if self.max_edits == 0
            || needle.len() < self.min_typo_len
            || needle.len() <= self.max_edits
        {
            return false;
        }

        min_word_distance(&haystack, &needle) <= self.max_edits
    }
}

/// Fuzzy containment with default settings.
pub fn fuzzy_contains(haystack: &str, needle: &str) -> bool {
    FuzzyMatcher::default().contains(haystack, needle)
}

/// Smallest edit distance between `needle` and any substring of `haystack`
/// that starts at a word start (the beginning, or after a non-alphanumeric).
fn min_word_distance(haystack: &str, needle: &[char]) -> usize {
    let haystack: Vec<char> = haystack.chars().collect();
    let m = needle.len();

    (0..haystack.len())
        .filter(|&start| start == 0 || !haystack[start - 1].is_alphanumeric())
        .map(|start| prefix_distance(&haystack[start..], needle))
        .min()
        .unwrap_or(m)
}

/// Smallest edit distance between `needle` and any prefix of `text`.
fn prefix_distance(text: &[char], needle: &[char]) -> usize {
    let m = needle.len();
    let mut column: Vec<usize> = (0..=m).collect();
    let mut best = column[m];

    for (j, &h) in text.iter().enumerate() {
        let mut diagonal = column[0];
        column[0] = j + 1;
        for i in 1..=m {
            let above = column[i];
            let cost = if needle[i - 1] == h { 0 } else { 1 };
            column[i] = (diagonal + cost).min(above + 1).min(column[i - 1] + 1);
            diagonal = above;
        }
        best = best.min(column[m]);
        if column.iter().min().is_some_and(|&low| low > best) {
            break;
        }
    }

    best
}
