use crate::constants::FREQUENCY_LIST_DELIMITER;
use crate::types::{Word, WordFrequency};
use crate::Error;
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `entries` as `<word> <count>` lines to any writer, in the given order.
pub fn write_frequency_list_to<W: Write>(
    writer: W,
    entries: &[(Word, WordFrequency)],
) -> Result<(), Error> {
    let mut writer = WriterBuilder::new()
        .delimiter(FREQUENCY_LIST_DELIMITER)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for (word, frequency) in entries {
        writer.write_record([word.as_str(), frequency.to_string().as_str()])?;
    }

    writer.flush()?;

    Ok(())
}

/// Creates (or truncates) `path` and writes the ranked list to it.
pub fn write_frequency_list(path: &Path, entries: &[(Word, WordFrequency)]) -> Result<(), Error> {
    let file = File::create(path).map_err(|err| {
        Error::IoError(std::io::Error::new(
            err.kind(),
            format!("{}: {}", path.display(), err),
        ))
    })?;

    write_frequency_list_to(BufWriter::new(file), entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let entries = vec![("the".to_string(), 2), ("cat".to_string(), 1)];

        let mut out = Vec::new();
        write_frequency_list_to(&mut out, &entries).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "the 2\ncat 1\n");
    }

    #[test]
    fn test_utf8_words() {
        let entries = vec![("привет".to_string(), 3)];

        let mut out = Vec::new();
        write_frequency_list_to(&mut out, &entries).unwrap();

        assert_eq!(out, "привет 3\n".as_bytes());
    }

    #[test]
    fn test_no_entries_writes_nothing() {
        let mut out = Vec::new();
        write_frequency_list_to(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
