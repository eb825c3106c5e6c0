// In-memory token frequency table and its corpus total.

use std::collections::HashMap;

/// Token -> count mapping for one corpus.
///
/// Tokens are stored exactly as they appeared in the source; any
/// normalization (casefolding etc.) is the caller's job. Each token appears
/// once: inserting a token again replaces its count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` for `token`, returning the count it replaced (if any).
    pub fn insert(&mut self, token: impl Into<String>, count: u64) -> Option<u64> {
        self.counts.insert(token.into(), count)
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct tokens, in no particular order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Sum of all counts (the corpus size in tokens), or `None` if it does
    /// not fit in a `u64`.
    pub fn total(&self) -> Option<u64> {
        self.counts
            .values()
            .try_fold(0u64, |acc, &count| acc.checked_add(count))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for (token, count) in iter {
            table.insert(token, count);
        }
        table
    }
}
