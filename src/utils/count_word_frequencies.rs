use crate::models::FrequencyCounter;
use crate::types::{Token, WordFrequencyMap};

/// Counts the case-folded frequency of every token in the given list.
///
/// # Arguments
/// * `tokens` - A slice of raw tokens, in any case.
///
/// # Returns
/// * A `HashMap` where the keys are lower-cased words and the values are their
///   respective frequencies.
///
/// # Example
/// ```
/// use frequency_words::count_word_frequencies;
///
/// let tokens = vec!["The".to_string(), "cat".to_string(), "the".to_string()];
/// let frequencies = count_word_frequencies(&tokens);
/// assert_eq!(frequencies.get("the"), Some(&2));
/// assert_eq!(frequencies.get("cat"), Some(&1));
/// ```
pub fn count_word_frequencies(tokens: &[Token]) -> WordFrequencyMap {
    let mut counter = FrequencyCounter::new();
    counter.record_all(tokens);
    counter.into_frequency_map()
}
