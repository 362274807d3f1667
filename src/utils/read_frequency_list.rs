use crate::constants::FREQUENCY_LIST_DELIMITER;
use crate::types::{RankedWordList, WordFrequency};
use crate::Error;
use csv::ReaderBuilder;
use std::io::{Cursor, Read};
use std::path::Path;

/// Parses a list previously produced by [`crate::write_frequency_list`].
pub fn read_frequency_list_from_string(list: &str) -> Result<RankedWordList, Error> {
    read_frequency_list_from_reader(Cursor::new(list))
}

pub fn read_frequency_list(path: &Path) -> Result<RankedWordList, Error> {
    let file = std::fs::File::open(path)?;
    read_frequency_list_from_reader(file)
}

fn read_frequency_list_from_reader<R: Read>(reader: R) -> Result<RankedWordList, Error> {
    let mut ranked_word_list = RankedWordList::new();

    let mut reader = ReaderBuilder::new()
        .delimiter(FREQUENCY_LIST_DELIMITER)
        .has_headers(false)
        .from_reader(reader);

    for (line_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            Error::ParserError(format!("Failed to read line {}: {}", line_idx + 1, e))
        })?;

        if record.len() != 2 {
            return Err(Error::ParserError(format!(
                "Line {} has {} fields, expected 2",
                line_idx + 1,
                record.len()
            )));
        }

        let word = &record[0];
        let frequency = record[1].parse::<WordFrequency>().map_err(|e| {
            Error::ParserError(format!(
                "Invalid count {:?} on line {}: {}",
                &record[1],
                line_idx + 1,
                e
            ))
        })?;

        ranked_word_list.push((word.to_string(), frequency));
    }

    Ok(ranked_word_list)
}
