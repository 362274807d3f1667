use crate::types::{TokenRef, WordFrequency, WordFrequencyMap};

/// Accumulates case-folded word counts across every token of a corpus.
///
/// No token is rejected here: numerals, punctuation and empty strings are all
/// counted. Filtering happens when the results are ranked.
#[derive(Debug, Default, Clone)]
pub struct FrequencyCounter {
    frequencies: WordFrequencyMap,
    total_tokens: usize,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        FrequencyCounter::default()
    }

    /// Lower-cases `token` and increments its count by one.
    pub fn record(&mut self, token: &TokenRef) {
        *self.frequencies.entry(token.to_lowercase()).or_insert(0) += 1;
        self.total_tokens += 1;
    }

    pub fn record_all<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<TokenRef>,
    {
        for token in tokens {
            self.record(token.as_ref());
        }
    }

    /// Folds the counts of `other` into this counter.
    pub fn merge(&mut self, other: FrequencyCounter) {
        for (word, frequency) in other.frequencies {
            *self.frequencies.entry(word).or_insert(0) += frequency;
        }
        self.total_tokens += other.total_tokens;
    }

    /// Count for an already case-folded word; zero if never seen.
    pub fn get(&self, word: &str) -> WordFrequency {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    pub fn into_frequency_map(self) -> WordFrequencyMap {
        self.frequencies
    }
}
