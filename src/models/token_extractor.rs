use crate::models::ElementPath;
use crate::types::Token;
use crate::Error;
use flate2::read::MultiGzDecoder;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

/// Token extractor over a gzip-compressed corpus file on disk.
pub type GzTokenExtractor = TokenExtractor<BufReader<MultiGzDecoder<File>>>;

/// A lazy, single-pass sequence of the word tokens in one XML document.
///
/// Every element reached through exactly the configured [`ElementPath`]
/// contributes one token: its leading text, i.e. the text and CDATA that come
/// before its first child node, with entity references resolved. An empty leaf
/// (`<w/>`) yields an empty token.
///
/// Text is decoded according to the document's BOM or `encoding` declaration,
/// defaulting to UTF-8.
///
/// Tokens come out in document order. The first decoding or well-formedness
/// error is returned as `Some(Err(..))`, after which the iterator is exhausted.
pub struct TokenExtractor<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    element_path: ElementPath,
    source: String,
    // One entry per open element: whether it and all its ancestors lie on the element path.
    open_elements: Vec<bool>,
    pending: Option<PendingToken>,
    root_seen: bool,
    root_closed: bool,
    done: bool,
}

struct PendingToken {
    text: String,
    // Cleared once the leaf opens its first child node.
    collecting: bool,
}

impl GzTokenExtractor {
    /// Opens `path` and decompresses it on the fly while parsing.
    pub fn from_path(path: &Path, element_path: &ElementPath) -> Result<Self, Error> {
        let file = File::open(path).map_err(|err| {
            Error::IoError(io::Error::new(
                err.kind(),
                format!("{}: {}", path.display(), err),
            ))
        })?;

        let reader = BufReader::new(MultiGzDecoder::new(file));

        Ok(TokenExtractor::with_source(
            reader,
            element_path,
            path.display().to_string(),
        ))
    }
}

impl<R: BufRead> TokenExtractor<R> {
    /// Parses already-decompressed XML from any buffered reader.
    pub fn from_reader(reader: R, element_path: &ElementPath) -> Self {
        TokenExtractor::with_source(reader, element_path, "<reader>".to_string())
    }

    fn with_source(reader: R, element_path: &ElementPath, source: String) -> Self {
        TokenExtractor {
            reader: Reader::from_reader(reader),
            buf: Vec::new(),
            element_path: element_path.clone(),
            source,
            open_elements: Vec::new(),
            pending: None,
            root_seen: false,
            root_closed: false,
            done: false,
        }
    }

    /// Where the tokens come from; the file path for [`GzTokenExtractor`].
    pub fn source(&self) -> &str {
        &self.source
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            self.buf.clear();

            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|err| parse_error(&self.source, err))?;

            match event {
                Event::Start(start) => {
                    let depth = self.open_elements.len();
                    if depth == 0 {
                        if self.root_closed {
                            return Err(parse_error(
                                &self.source,
                                "extra content after the root element",
                            ));
                        }
                        self.root_seen = true;
                    }

                    let parent_on_path = self.open_elements.last().copied().unwrap_or(true);
                    let on_path =
                        parent_on_path && self.element_path.matches_at(depth, start.name().as_ref());

                    if let Some(pending) = self.pending.as_mut() {
                        pending.collecting = false;
                    }

                    if on_path && self.element_path.is_leaf_depth(depth) {
                        self.pending = Some(PendingToken {
                            text: String::new(),
                            collecting: true,
                        });
                    }

                    self.open_elements.push(on_path);
                }
                Event::Empty(empty) => {
                    let depth = self.open_elements.len();
                    if depth == 0 {
                        if self.root_closed {
                            return Err(parse_error(
                                &self.source,
                                "extra content after the root element",
                            ));
                        }
                        self.root_seen = true;
                        self.root_closed = true;
                    }

                    let parent_on_path = self.open_elements.last().copied().unwrap_or(true);
                    let on_path =
                        parent_on_path && self.element_path.matches_at(depth, empty.name().as_ref());

                    if let Some(pending) = self.pending.as_mut() {
                        pending.collecting = false;
                    }

                    if on_path && self.element_path.is_leaf_depth(depth) {
                        return Ok(Some(Token::new()));
                    }
                }
                Event::End(_) => {
                    if self.open_elements.pop().is_none() {
                        return Err(parse_error(&self.source, "unmatched end tag"));
                    }

                    let depth = self.open_elements.len();
                    if depth == 0 {
                        self.root_closed = true;
                    }

                    if self.element_path.is_leaf_depth(depth) {
                        if let Some(pending) = self.pending.take() {
                            return Ok(Some(pending.text));
                        }
                    }
                }
                Event::Text(text) => {
                    if let Some(pending) = self.pending.as_mut().filter(|p| p.collecting) {
                        let unescaped = text
                            .unescape()
                            .map_err(|err| parse_error(&self.source, err))?;
                        pending.text.push_str(&unescaped);
                    }
                }
                Event::CData(cdata) => {
                    if let Some(pending) = self.pending.as_mut().filter(|p| p.collecting) {
                        let decoded = self
                            .reader
                            .decoder()
                            .decode(&cdata)
                            .map_err(|err| parse_error(&self.source, err))?;
                        pending.text.push_str(&decoded);
                    }
                }
                Event::Comment(_) | Event::PI(_) => {
                    if let Some(pending) = self.pending.as_mut() {
                        pending.collecting = false;
                    }
                }
                Event::Eof => {
                    if !self.open_elements.is_empty() {
                        return Err(parse_error(&self.source, "unexpected end of document"));
                    }
                    if !self.root_seen {
                        return Err(parse_error(&self.source, "document has no root element"));
                    }
                    return Ok(None);
                }
                Event::Decl(_) | Event::DocType(_) => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for TokenExtractor<R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for TokenExtractor<R> {}

fn parse_error(source: &str, detail: impl Display) -> Error {
    Error::ParserError(format!("{}: {}", source, detail))
}
