use frequency_words::{CorpusWalker, ElementPath, Error, GzTokenExtractor, Token};
use test_utils::TestCorpus;

#[cfg(test)]
mod gz_token_extractor_tests {
    use super::*;

    fn extract_all(path: &std::path::Path) -> Result<Vec<Token>, Error> {
        GzTokenExtractor::from_path(path, &ElementPath::default())?.collect()
    }

    #[test]
    fn test_tokens_in_document_order() {
        let corpus = TestCorpus::new();
        let path = corpus.add_document("doc.xml.gz", &[&["In", "the"], &["beginning", "."]]);

        let tokens = extract_all(&path).unwrap();
        assert_eq!(tokens, vec!["In", "the", "beginning", "."]);
    }

    #[test]
    fn test_escaped_words_round_trip() {
        let corpus = TestCorpus::new();
        let path = corpus.add_document("doc.xml.gz", &[&["R&D", "<tag>"]]);

        let tokens = extract_all(&path).unwrap();
        assert_eq!(tokens, vec!["R&D", "<tag>"]);
    }

    #[test]
    fn test_multi_member_gzip() {
        let corpus = TestCorpus::new();

        let mut bytes = test_utils::gzip_bytes(b"<document><s><w>first</w>");
        bytes.extend(test_utils::gzip_bytes(b"<w>second</w></s></document>"));
        let path = corpus.add_raw("multi.xml.gz", &bytes);

        let tokens = extract_all(&path).unwrap();
        assert_eq!(tokens, vec!["first", "second"]);
    }

    #[test]
    fn test_latin1_document() {
        let corpus = TestCorpus::new();

        let mut xml: Vec<u8> =
            br#"<?xml version="1.0" encoding="ISO-8859-1"?><document><s><w>"#.to_vec();
        xml.extend_from_slice(b"\xC9t\xE9</w><w>caf\xE9</w></s></document>");
        let path = corpus.add_raw("latin1.xml.gz", &test_utils::gzip_bytes(&xml));

        let tokens = extract_all(&path).unwrap();
        assert_eq!(tokens, vec!["Été", "café"]);
    }

    #[test]
    fn test_source_is_the_file_path() {
        let corpus = TestCorpus::new();
        let path = corpus.add_document("named.xml.gz", &[&["x"]]);

        let extractor = GzTokenExtractor::from_path(&path, &ElementPath::default()).unwrap();
        assert_eq!(extractor.source(), path.display().to_string());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let corpus = TestCorpus::new();
        let result = GzTokenExtractor::from_path(
            &corpus.root().join("missing.xml.gz"),
            &ElementPath::default(),
        );

        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_truncated_gzip_is_a_parser_error() {
        let corpus = TestCorpus::new();
        let xml = test_utils::document_xml(&[&["alpha", "beta", "gamma"]]);
        let compressed = test_utils::gzip_bytes(xml.as_bytes());
        let path = corpus.add_raw("cut.xml.gz", &compressed[..compressed.len() / 2]);

        let result = extract_all(&path);
        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_error_message_names_the_file() {
        let corpus = TestCorpus::new();
        let path = corpus.add_compressed("broken.xml.gz", "<document><s></document>");

        match extract_all(&path) {
            Err(Error::ParserError(msg)) => assert!(msg.contains("broken.xml.gz")),
            other => panic!("expected parser error, got {:?}", other),
        }
    }

    #[test]
    fn test_extractor_is_lazy() {
        let corpus = TestCorpus::new();
        let path = corpus.add_compressed(
            "lazy.xml.gz",
            "<document><s><w>one</w><w>two</w></s><broken></document>",
        );

        let mut extractor = GzTokenExtractor::from_path(&path, &ElementPath::default()).unwrap();
        assert_eq!(extractor.next().unwrap().unwrap(), "one");
        assert_eq!(extractor.next().unwrap().unwrap(), "two");
        assert!(extractor.next().unwrap().is_err());
        assert!(extractor.next().is_none());
    }
}

#[cfg(test)]
mod corpus_walker_tests {
    use super::*;

    #[test]
    fn test_candidate_files_feed_the_extractor() {
        let corpus = TestCorpus::new();
        corpus.add_document("a/one.xml.gz", &[&["x"]]);
        corpus.add_document("b/two.xml.gz", &[&["y", "z"]]);
        corpus.add_raw("b/skip.txt", b"ignored");

        let walker = CorpusWalker::new(corpus.root());
        assert_eq!(walker.root(), corpus.root().as_path());

        let mut tokens: Vec<Token> = walker
            .candidate_files()
            .flat_map(|path| GzTokenExtractor::from_path(&path, &ElementPath::default()).unwrap())
            .collect::<Result<_, _>>()
            .unwrap();
        tokens.sort();

        assert_eq!(tokens, vec!["x", "y", "z"]);
        assert_eq!(walker.files().count(), 3);
    }
}
