/// File name suffix (compared lower-cased) that marks a corpus file as compressed XML.
pub const CANDIDATE_FILE_SUFFIX: &str = ".xml.gz";

pub const DEFAULT_INPUT_DIR: &str = "./";

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "Out.log";

/// Element names, from the root down, of the leaf elements holding one word each.
pub const DEFAULT_TOKEN_ELEMENT_PATH: &[&str] = &["document", "s", "w"];

/// Field delimiter of the serialized frequency list.
pub const FREQUENCY_LIST_DELIMITER: u8 = b' ';
