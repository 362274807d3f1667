use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. A token is the raw text of one word element
/// extracted from a corpus document, before any case folding.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents a case-folded (lower-cased) word as an owned `String`.
pub type Word = String;

/// Represents the total number of occurrences of a word across the whole corpus.
pub type WordFrequency = usize;

/// Represents a map of words to their frequency counts across the corpus.
/// The key is the lower-cased `Word`, and the value is the `WordFrequency`.
pub type WordFrequencyMap = HashMap<Word, WordFrequency>;

/// A filtered, ranked list of `(Word, WordFrequency)` pairs, ordered by descending frequency.
pub type RankedWordList = Vec<(Word, WordFrequency)>;
