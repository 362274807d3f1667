pub mod corpus_config;
pub use corpus_config::CorpusConfig;

pub mod corpus_summary;
pub use corpus_summary::CorpusSummary;

pub mod corpus_walker;
pub use corpus_walker::CorpusWalker;

pub mod element_path;
pub use element_path::ElementPath;

pub mod error;
pub use error::Error;

pub mod frequency_counter;
pub use frequency_counter::FrequencyCounter;

pub mod token_extractor;
pub use token_extractor::{GzTokenExtractor, TokenExtractor};
