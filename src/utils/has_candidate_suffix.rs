use crate::constants::CANDIDATE_FILE_SUFFIX;
use std::path::Path;

/// Whether the file name of `path`, lower-cased, ends in `.xml.gz`.
pub fn has_candidate_suffix(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_lowercase()
                .ends_with(CANDIDATE_FILE_SUFFIX)
        })
        .unwrap_or(false)
}
