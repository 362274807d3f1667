pub const DEFAULT_OUTPUT_FILE_NAME: &str = "frequencies.txt";

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
