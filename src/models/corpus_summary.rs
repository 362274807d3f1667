use std::fmt;

/// Counters describing one pass over a corpus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CorpusSummary {
    /// Files seen by the walk, matching or not.
    pub files_visited: usize,
    /// Compressed-XML files whose tokens were counted.
    pub files_parsed: usize,
    /// Files dropped because they failed to parse (only with `skip_malformed`).
    pub files_skipped: usize,
    pub tokens_counted: usize,
    pub distinct_words: usize,
    /// Lines in the output file; zero when no output was written.
    pub entries_written: usize,
    pub output_written: bool,
}

impl fmt::Display for CorpusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files visited, {} parsed, {} skipped; {} tokens, {} distinct words, {} entries written",
            self.files_visited,
            self.files_parsed,
            self.files_skipped,
            self.tokens_counted,
            self.distinct_words,
            self.entries_written
        )
    }
}
