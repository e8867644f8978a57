//! Readers for the leaked password files a benchmark job is scored against.

mod hash_pure;
mod plaintext_pure;
mod plaintext_withcount;

use anyhow::{Context, Result};
use guesswatch_common::job::{FileType, PasswordFormat};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Password multiset read from a leak file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPasswords {
    /// Password (or hash) to number of accounts using it.
    pub passwords: HashMap<String, u64>,
    /// Accounts in the file, i.e. the sum of all counts.
    pub total: u64,
    /// Lines that could not be parsed.
    pub errors: u64,
}

impl ParsedPasswords {
    fn record(&mut self, password: String, count: u64) {
        *self.passwords.entry(password).or_insert(0) += count;
        self.total += count;
    }
}

/// Parser for one of the supported leak file layouts.
#[derive(Debug, Clone)]
pub enum InputParser {
    PlaintextPure(PathBuf),
    HashPure(PathBuf),
    PlaintextWithcount(PathBuf),
}

impl InputParser {
    pub fn new(format: PasswordFormat, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match format {
            PasswordFormat::PlaintextPure => InputParser::PlaintextPure(path),
            PasswordFormat::HashPure => InputParser::HashPure(path),
            PasswordFormat::PlaintextWithcount => InputParser::PlaintextWithcount(path),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            InputParser::PlaintextPure(path)
            | InputParser::HashPure(path)
            | InputParser::PlaintextWithcount(path) => path,
        }
    }

    pub fn file_type(&self) -> FileType {
        match self {
            InputParser::PlaintextPure(_) | InputParser::PlaintextWithcount(_) => {
                FileType::Plaintext
            }
            InputParser::HashPure(_) => FileType::HashValues,
        }
    }

    /// Reads the whole file. Malformed lines are counted, only I/O failures are errors.
    pub fn parse(&self) -> Result<ParsedPasswords> {
        let path = self.path();
        let file = File::open(path)
            .with_context(|| format!("Failed to open password file {:?}", path))?;
        let parsed = self
            .parse_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read password file {:?}", path))?;

        if parsed.errors > 0 {
            warn!(
                "{} malformed lines skipped while parsing {:?}",
                parsed.errors, path
            );
        }
        debug!(
            "Parsed {:?}: {} accounts, {} distinct entries",
            path,
            parsed.total,
            parsed.passwords.len()
        );
        Ok(parsed)
    }

    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<ParsedPasswords> {
        let mut parsed = ParsedPasswords::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            let entry = match self {
                InputParser::PlaintextPure(_) => plaintext_pure::parse_line(line),
                InputParser::HashPure(_) => hash_pure::parse_line(line),
                InputParser::PlaintextWithcount(_) => plaintext_withcount::parse_line(line),
            };
            match entry {
                Some((password, count)) => parsed.record(password, count),
                None => parsed.errors += 1,
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_types() {
        assert_eq!(
            InputParser::new(PasswordFormat::PlaintextPure, "a").file_type(),
            FileType::Plaintext
        );
        assert_eq!(
            InputParser::new(PasswordFormat::PlaintextWithcount, "a").file_type(),
            FileType::Plaintext
        );
        assert_eq!(
            InputParser::new(PasswordFormat::HashPure, "a").file_type(),
            FileType::HashValues
        );
    }

    #[test]
    fn test_plaintext_pure_counts_duplicates() {
        let parser = InputParser::new(PasswordFormat::PlaintextPure, "leak.txt");
        let parsed = parser
            .parse_reader(Cursor::new("123456\npassword\n123456\r\n\nqwerty"))
            .unwrap();

        assert_eq!(parsed.total, 4);
        assert_eq!(parsed.errors, 1);
        assert_eq!(parsed.passwords["123456"], 2);
        assert_eq!(parsed.passwords["qwerty"], 1);
    }

    #[test]
    fn test_withcount_sums_counts() {
        let parser = InputParser::new(PasswordFormat::PlaintextWithcount, "leak.txt");
        let parsed = parser
            .parse_reader(Cursor::new("  290729 123456\n   79076 12345\n  3 pass word\nbroken\n"))
            .unwrap();

        assert_eq!(parsed.total, 290729 + 79076 + 3);
        assert_eq!(parsed.passwords["pass word"], 3);
        assert_eq!(parsed.errors, 1);
    }

    #[test]
    fn test_parse_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "5F4DCC3B5AA765D61D8327DEB882CF99\ne10adc3949ba59abbe56e057f20f883e\n").unwrap();

        let parsed = InputParser::new(PasswordFormat::HashPure, file.path())
            .parse()
            .unwrap();

        assert_eq!(parsed.total, 2);
        assert!(parsed.passwords.contains_key("5f4dcc3b5aa765d61d8327deb882cf99"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = InputParser::new(PasswordFormat::PlaintextPure, "/nonexistent/leak.txt").parse();
        assert!(result.is_err());
    }
}
