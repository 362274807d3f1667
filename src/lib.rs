mod config;
pub mod constants;
pub mod models;
pub use models::{
    CorpusConfig, CorpusSummary, CorpusWalker, ElementPath, Error, FrequencyCounter,
    GzTokenExtractor, TokenExtractor,
};
pub mod types;
mod utils;
pub use types::{RankedWordList, Token, TokenRef, Word, WordFrequency, WordFrequencyMap};
pub use utils::{
    count_word_frequencies, has_candidate_suffix, is_alphabetic_word, read_frequency_list,
    read_frequency_list_from_string, sort_results, validate_input_dir, write_frequency_list,
    write_frequency_list_to,
};

use log::{debug, info, warn};
use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Counts the word frequencies of a corpus directory and writes the ranked list.
///
/// The input directory is validated first; a bad directory is reported as
/// [`Error::ConfigError`] before any corpus file is read. When the corpus yields
/// no tokens at all, the output file is left untouched (not created) and the
/// returned summary has `output_written == false`.
pub fn count_word_frequencies_in_dir(config: &CorpusConfig) -> Result<CorpusSummary, Error> {
    let (frequency_map, mut summary) = build_frequency_map(config)?;

    if frequency_map.is_empty() {
        if !config.quiet {
            info!(
                "No words found under {}; {} was not written",
                config.input_dir.display(),
                config.output_path.display()
            );
        }
        return Ok(summary);
    }

    let ranked_word_list = sort_results(frequency_map);

    write_frequency_list(&config.output_path, &ranked_word_list)?;

    summary.entries_written = ranked_word_list.len();
    summary.output_written = true;

    if !config.quiet {
        info!(
            "Wrote {} words to {}",
            summary.entries_written,
            config.output_path.display()
        );
    }

    Ok(summary)
}

/// Walks the corpus and aggregates every token, without ranking or writing anything.
pub fn build_frequency_map(
    config: &CorpusConfig,
) -> Result<(WordFrequencyMap, CorpusSummary), Error> {
    validate_input_dir(&config.input_dir)?;

    let walker = CorpusWalker::new(&config.input_dir);
    let mut counter = FrequencyCounter::new();
    let mut summary = CorpusSummary::default();

    for path in walker.files() {
        summary.files_visited += 1;

        if !has_candidate_suffix(&path) {
            debug!("Ignoring {}", path.display());
            continue;
        }

        if !config.quiet {
            info!("Processing {}", path.display());
        }

        if config.skip_malformed {
            // Stage the file's counts so a failure halfway through leaves no trace.
            let mut file_counter = FrequencyCounter::new();
            match count_file_tokens(&path, config, &mut file_counter) {
                Ok(()) => {
                    counter.merge(file_counter);
                    summary.files_parsed += 1;
                }
                Err(err) => {
                    warn!("Skipping {}: {}", path.display(), err);
                    summary.files_skipped += 1;
                }
            }
        } else {
            count_file_tokens(&path, config, &mut counter)?;
            summary.files_parsed += 1;
        }
    }

    summary.tokens_counted = counter.total_tokens();
    summary.distinct_words = counter.len();

    Ok((counter.into_frequency_map(), summary))
}

fn count_file_tokens(
    path: &Path,
    config: &CorpusConfig,
    counter: &mut FrequencyCounter,
) -> Result<(), Error> {
    let extractor = GzTokenExtractor::from_path(path, &config.element_path)?;

    for token in extractor {
        counter.record(&token?);
    }

    Ok(())
}
