use crate::types::{RankedWordList, WordFrequencyMap};
use crate::utils::is_alphabetic_word;

/// Filters and sorts a mapping of words to their frequencies.
///
/// This function takes a `WordFrequencyMap`, which maps lower-cased words to
/// their occurrence counts, drops every word that is not purely alphabetic,
/// and returns the rest as a sorted vector of `(Word, WordFrequency)` pairs.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use frequency_words::sort_results;
/// use frequency_words::types::WordFrequencyMap;
///
/// let mut results: WordFrequencyMap = HashMap::new();
/// results.insert("cat".to_string(), 10);
/// results.insert("the".to_string(), 15);
/// results.insert("42".to_string(), 99);
/// results.insert("ant".to_string(), 10);
///
/// let sorted = sort_results(results);
/// assert_eq!(sorted, vec![
///     ("the".to_string(), 15),
///     ("ant".to_string(), 10),
///     ("cat".to_string(), 10)
/// ]);
/// ```
pub fn sort_results(results: WordFrequencyMap) -> RankedWordList {
    let mut sorted_results: RankedWordList = results
        .into_iter()
        .filter(|(word, _)| is_alphabetic_word(word))
        .collect();

    sorted_results.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    sorted_results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_counts_are_non_increasing() {
        let results: WordFrequencyMap = [("a", 3), ("b", 7), ("c", 1), ("d", 5), ("e", 5)]
            .into_iter()
            .map(|(w, c)| (w.to_string(), c))
            .collect();

        let sorted = sort_results(results);

        assert_eq!(sorted.len(), 5);
        assert!(sorted.windows(2).all(|pair| pair[0].1 >= pair[1].1));
        assert_eq!(sorted[1], ("d".to_string(), 5));
        assert_eq!(sorted[2], ("e".to_string(), 5));
    }

    #[test]
    fn test_non_alphabetic_words_are_dropped() {
        let mut results: WordFrequencyMap = HashMap::new();
        results.insert("ok".to_string(), 2);
        results.insert("42".to_string(), 1);
        results.insert("".to_string(), 8);
        results.insert("x-ray".to_string(), 4);

        assert_eq!(sort_results(results), vec![("ok".to_string(), 2)]);
    }

    #[test]
    fn test_empty_map() {
        assert!(sort_results(HashMap::new()).is_empty());
    }
}
