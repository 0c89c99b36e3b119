//! Word frequency counting with first-seen ordering.

use indexmap::IndexMap;

/// Occurrence counts keyed by token, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: IndexMap<String, usize>,
}

impl WordFrequencies {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a token sequence.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequencies = Self::new();
        for token in tokens {
            frequencies.add(token.as_ref());
        }
        frequencies
    }

    /// Records one occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    /// Occurrences of `token`, zero when unseen.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true when no token has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The highest occurrence count, if any token was recorded.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Every token sharing the highest count, in first-seen order.
    ///
    /// Ties are all returned; an empty table yields an empty vector.
    pub fn most_common(&self) -> Vec<String> {
        let Some(max) = self.max_count() else {
            return Vec::new();
        };

        self.counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(token, _)| token.clone())
            .collect()
    }

    /// Iterates `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}
