use clap::Parser;
use frequency_words::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE_NAME};
use frequency_words::{count_word_frequencies_in_dir, CorpusConfig};
use log::{error, info};
use std::path::PathBuf;

/// Word frequency list generator
///
/// Takes a folder containing compressed xml files and writes a list of word occurrences,
/// most frequent first.
#[derive(Parser, Debug)]
#[command(name = "frequency-words", version, about, long_about)]
struct Cli {
    /// Input directory
    #[arg(short = 'i', long = "indir", default_value = DEFAULT_INPUT_DIR)]
    indir: PathBuf,

    /// Output filename
    #[arg(short = 'o', long = "outfilename", default_value = DEFAULT_OUTPUT_FILE_NAME)]
    outfilename: PathBuf,

    /// Do not report progress
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Skip files that cannot be decompressed or parsed instead of aborting
    #[arg(long = "skip-malformed")]
    skip_malformed: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CorpusConfig::default()
        .with_input_dir(cli.indir)
        .with_output_path(cli.outfilename)
        .with_quiet(cli.quiet)
        .with_skip_malformed(cli.skip_malformed);

    match count_word_frequencies_in_dir(&config) {
        Ok(summary) => {
            if !config.quiet {
                info!("{}", summary);
            }
        }
        Err(e) if e.is_config_error() => {
            error!("{}", e);
            std::process::exit(2);
        }
        Err(e) => {
            error!("Error counting word frequencies: {}", e);
            std::process::exit(1);
        }
    }
}
