use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads picker options, one per line, from stdin or a file
pub struct OptionReader;

impl OptionReader {
    /// Read options from a file path, or stdin when `path` is None
    pub fn read_options(path: Option<&Path>) -> io::Result<Vec<String>> {
        match path {
            Some(file_path) => Self::read_from(BufReader::new(File::open(file_path)?)),
            None => Self::read_from(io::stdin().lock()),
        }
    }

    /// Collect non-blank lines with trailing whitespace trimmed
    pub fn read_from(reader: impl BufRead) -> io::Result<Vec<String>> {
        let mut options = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let option = line.trim_end();
            if !option.is_empty() {
                options.push(option.to_string());
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
