use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE_NAME};
use crate::models::{CorpusConfig, ElementPath};
use std::path::PathBuf;

impl Default for CorpusConfig {
    fn default() -> Self {
        CorpusConfig {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE_NAME),
            quiet: false,
            skip_malformed: false,
            element_path: ElementPath::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CorpusConfig::default();

        assert_eq!(config.input_dir, PathBuf::from("./"));
        assert_eq!(config.output_path, PathBuf::from("Out.log"));
        assert!(!config.quiet);
        assert!(!config.skip_malformed);
        assert_eq!(config.element_path, ElementPath::default());
    }

    #[test]
    fn test_builder_setters() {
        let config = CorpusConfig::default()
            .with_input_dir("corpus")
            .with_output_path("freq.txt")
            .with_quiet(true)
            .with_skip_malformed(true);

        assert_eq!(config.input_dir, PathBuf::from("corpus"));
        assert_eq!(config.output_path, PathBuf::from("freq.txt"));
        assert!(config.quiet);
        assert!(config.skip_malformed);
    }
}
