use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The input directory is missing, is not a directory, or cannot be read.
    ConfigError(String),
    /// A corpus file could not be decompressed or is not well-formed XML.
    ParserError(String),
    IoError(std::io::Error),
    OutputError(String),
}

impl Error {
    /// Returns `true` if the error was raised while validating the run configuration,
    /// before any corpus file was touched.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::ConfigError(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::OutputError(msg) => write!(f, "Output Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::OutputError(err.to_string())
    }
}
