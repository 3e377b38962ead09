//! General-purpose keyword counting capabilities.

use counter::Counter;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;
use std::vec::IntoIter;

/// The set of keywords a tally looks for.
///
/// Words are lowercased on the way in and duplicates collapse, so a word
/// list like `Java java JAVA` counts as the single target `java`.
#[derive(Clone, Debug)]
pub struct TargetWordSet {
    words: BTreeSet<String>,
}

impl TargetWordSet {
    /// Builds a word set from raw word list tokens.
    ///
    /// Each token is split on whitespace, so the set can be built from a
    /// single quoted argument (`'python java javascript'`), from several
    /// arguments, or from any mix of the two.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = tokens
            .into_iter()
            .flat_map(|token| {
                token
                    .as_ref()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { words }
    }

    /// True if the set contains no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if `word` is a member of the set.
    ///
    /// Matches are exact; `word` is expected to already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }
}

/// A pair of keyword and count.
pub type KeywordCount = (String, usize);

/// Counts how many scanned titles mention each word of a [`TargetWordSet`].
///
/// A title "mentions" a word if the lowercased title contains the word as a
/// substring. A title increments each matching word at most once, no matter
/// how many times the word occurs within it. Counts never decrease.
#[derive(Debug)]
pub struct KeywordTally {
    words: TargetWordSet,
    counts: Counter<String>,
}

impl KeywordTally {
    /// Creates an empty tally for the given word set.
    pub fn new(words: TargetWordSet) -> Self {
        let counts = Counter::new();
        Self { words, counts }
    }

    /// Scans a single title, incrementing every target word it mentions.
    pub fn scan(&mut self, title: &str) {
        let title = title.to_lowercase();
        let hits = self
            .words
            .iter()
            .filter(|word| title.contains(word.as_str()))
            .cloned();
        self.counts.update(hits);
    }

    /// True if no scanned title has mentioned any target word.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The current count for a word, or zero if it has never matched.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Returns the tallied (keyword, count) pairs, sorted by descending
    /// count with ties broken by ascending keyword.
    ///
    /// Words that never matched are omitted.
    pub fn into_sorted(self) -> IntoIter<KeywordCount> {
        self.counts
            .most_common_tiebreaker(|lhs, rhs| Ord::cmp(lhs, rhs))
            .into_iter()
    }
}

impl fmt::Display for KeywordTally {
    /// Formats the tally as `word: count` lines in sorted order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .counts
            .most_common_tiebreaker(|lhs, rhs| Ord::cmp(lhs, rhs))
            .into_iter()
            .map(|(word, count)| format!("{word}: {count}"))
            .join("\n");
        write!(f, "{lines}")
    }
}
