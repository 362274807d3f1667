use crate::models::ElementPath;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Root of the corpus tree. Must be an existing, readable directory.
    pub input_dir: PathBuf,
    /// Destination of the ranked list. Truncated and rewritten on every run.
    pub output_path: PathBuf,
    /// Suppresses per-file progress and end-of-run messages.
    pub quiet: bool,
    /// Skip (and log) corpus files that fail to decompress or parse instead of
    /// aborting the whole run.
    pub skip_malformed: bool,
    pub element_path: ElementPath,
}

impl CorpusConfig {
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_skip_malformed(mut self, skip_malformed: bool) -> Self {
        self.skip_malformed = skip_malformed;
        self
    }

    pub fn with_element_path(mut self, element_path: ElementPath) -> Self {
        self.element_path = element_path;
        self
    }
}
