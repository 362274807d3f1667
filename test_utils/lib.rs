use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod constants;
use constants::{DEFAULT_OUTPUT_FILE_NAME, XML_DECLARATION};

/// A throwaway corpus directory with its own output path next to it.
///
/// The output path lives outside the corpus root so that writing it never
/// adds a file to the tree being walked.
pub struct TestCorpus {
    workspace: TempDir,
}

impl TestCorpus {
    pub fn new() -> Self {
        let workspace = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir(workspace.path().join("corpus")).expect("Failed to create corpus dir");

        TestCorpus { workspace }
    }

    pub fn root(&self) -> PathBuf {
        self.workspace.path().join("corpus")
    }

    pub fn output_path(&self) -> PathBuf {
        self.workspace.path().join(DEFAULT_OUTPUT_FILE_NAME)
    }

    /// Writes a gzip-compressed document with one `<s>` per sentence and one `<w>` per word.
    pub fn add_document(&self, relative_path: &str, sentences: &[&[&str]]) -> PathBuf {
        self.add_compressed(relative_path, &document_xml(sentences))
    }

    /// Writes `xml` gzip-compressed at `relative_path`.
    pub fn add_compressed(&self, relative_path: &str, xml: &str) -> PathBuf {
        let path = self.prepare(relative_path);
        write_gz(&path, xml.as_bytes());
        path
    }

    /// Writes raw bytes, uncompressed, at `relative_path`.
    pub fn add_raw(&self, relative_path: &str, bytes: &[u8]) -> PathBuf {
        let path = self.prepare(relative_path);
        fs::write(&path, bytes).expect("Failed to write raw file");
        path
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("Failed to read output file")
    }

    pub fn output_exists(&self) -> bool {
        self.output_path().exists()
    }

    fn prepare(&self, relative_path: &str) -> PathBuf {
        let path = self.root().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        path
    }
}

impl Default for TestCorpus {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a `/document/s/w` document from nested word lists.
pub fn document_xml(sentences: &[&[&str]]) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str("\n<document id=\"test\">\n");

    for (s_idx, words) in sentences.iter().enumerate() {
        xml.push_str(&format!("  <s id=\"{}\">\n", s_idx + 1));
        for (w_idx, word) in words.iter().enumerate() {
            xml.push_str(&format!(
                "    <w id=\"{}.{}\">{}</w>\n",
                s_idx + 1,
                w_idx + 1,
                escape_text(word)
            ));
        }
        xml.push_str("  </s>\n");
    }

    xml.push_str("</document>\n");
    xml
}

pub fn write_gz(path: &Path, bytes: &[u8]) {
    let file = File::create(path).expect("Failed to create gz file");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(bytes).expect("Failed to compress data");
    encoder.finish().expect("Failed to finalize compression");
}

pub fn gzip_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut compressed_data = Vec::new();
    {
        let mut encoder = GzEncoder::new(&mut compressed_data, Compression::default());
        encoder.write_all(bytes).expect("Failed to compress data");
        encoder.finish().expect("Failed to finalize compression");
    }
    compressed_data
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
