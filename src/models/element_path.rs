use crate::constants::DEFAULT_TOKEN_ELEMENT_PATH;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// An absolute chain of element names, from the document root down to the
/// leaf element whose text is a single token.
///
/// Only direct parent/child nesting matches: with the default path
/// `document/s/w`, a `<w>` nested inside any other element (or directly under
/// `<document>`) is not a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPath {
    segments: Vec<Vec<u8>>,
}

impl ElementPath {
    pub fn new(segments: &[&str]) -> Result<Self, Error> {
        if segments.is_empty() {
            return Err(Error::ConfigError(
                "element path must name at least one element".to_string(),
            ));
        }

        if let Some(empty) = segments.iter().position(|segment| segment.is_empty()) {
            return Err(Error::ConfigError(format!(
                "element path segment {} is empty",
                empty
            )));
        }

        Ok(ElementPath {
            segments: segments
                .iter()
                .map(|segment| segment.as_bytes().to_vec())
                .collect(),
        })
    }

    /// Number of elements from the root to the token leaf, inclusive.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether an element named `name`, opened at `depth` (root is 0) under a parent
    /// that is itself on the path, continues the path.
    pub fn matches_at(&self, depth: usize, name: &[u8]) -> bool {
        self.segments
            .get(depth)
            .map_or(false, |segment| segment.as_slice() == name)
    }

    /// Whether `depth` is the depth of the token leaf.
    pub fn is_leaf_depth(&self, depth: usize) -> bool {
        depth + 1 == self.segments.len()
    }
}

impl Default for ElementPath {
    fn default() -> Self {
        ElementPath {
            segments: DEFAULT_TOKEN_ELEMENT_PATH
                .iter()
                .map(|segment| segment.as_bytes().to_vec())
                .collect(),
        }
    }
}

impl FromStr for ElementPath {
    type Err = Error;

    /// Parses a slash-separated path such as `/document/s/w`. A leading slash is optional.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        ElementPath::new(&segments)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", String::from_utf8_lossy(segment))?;
        }
        Ok(())
    }
}
