use crate::utils::has_candidate_suffix;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively enumerates the files of a corpus tree.
///
/// Entries come back in directory-enumeration order, which is platform dependent.
/// Symbolic links to directories are not descended into. Directories that cannot
/// be read are logged and skipped; the walk itself never fails.
pub struct CorpusWalker {
    root: PathBuf,
}

impl CorpusWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CorpusWalker { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every non-directory entry below the root, matching or not.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable corpus entry: {}", err);
                    None
                }
            })
            .filter(is_file_entry)
            .map(DirEntry::into_path)
    }

    /// Only the entries whose name carries the compressed-XML suffix.
    pub fn candidate_files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files().filter(|path| has_candidate_suffix(path))
    }
}

// A symlink counts as a file unless it resolves to a directory.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();

    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_walks_nested_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        fs::write(dir.path().join("top.xml.gz"), b"").unwrap();
        fs::write(dir.path().join("a/b/c/deep.XML.GZ"), b"").unwrap();
        fs::write(dir.path().join("a/notes.txt"), b"").unwrap();

        let walker = CorpusWalker::new(dir.path());

        let mut files: Vec<PathBuf> = walker.files().collect();
        files.sort();
        assert_eq!(files.len(), 3);

        let mut candidates: Vec<PathBuf> = walker.candidate_files().collect();
        candidates.sort();
        assert_eq!(
            candidates,
            vec![
                dir.path().join("a/b/c/deep.XML.GZ"),
                dir.path().join("top.xml.gz"),
            ]
        );
    }

    #[test]
    fn test_directories_named_like_candidates_are_not_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("looks_like.xml.gz")).unwrap();

        let walker = CorpusWalker::new(dir.path());
        assert_eq!(walker.candidate_files().count(), 0);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = tempdir().unwrap();
        let walker = CorpusWalker::new(dir.path().join("does_not_exist"));

        assert_eq!(walker.files().count(), 0);
    }
}
