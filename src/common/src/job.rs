use crate::constants::UNBOUNDED_CEILING_TOKENS;
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

/// Layout of the leaked password file handed to the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordFormat {
    PlaintextPure,
    HashPure,
    PlaintextWithcount,
}

impl PasswordFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordFormat::PlaintextPure => "plaintext_pure",
            PasswordFormat::HashPure => "hash_pure",
            PasswordFormat::PlaintextWithcount => "plaintext_withcount",
        }
    }
}

impl FromStr for PasswordFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plaintext_pure" => Ok(PasswordFormat::PlaintextPure),
            "hash_pure" => Ok(PasswordFormat::HashPure),
            "plaintext_withcount" => Ok(PasswordFormat::PlaintextWithcount),
            other => bail!(
                "Unsupported file type <{}>! Expected \"plaintext_pure\", \"hash_pure\" or \"plaintext_withcount\".",
                other
            ),
        }
    }
}

impl fmt::Display for PasswordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the parsed password file contains. Decides whether the guesser
/// stream carries plaintext candidates or cracking-tool status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Plaintext,
    HashValues,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Plaintext => "plaintext",
            FileType::HashValues => "hashvalues",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration of a single benchmark run. Built once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub label: String,
    pub format: PasswordFormat,
    pub password_file: PathBuf,
    pub guesser_pid: u32,
    pub interval: NonZeroUsize,
    /// `None` means the guesser is never stopped by the monitor.
    pub ceiling: Option<u64>,
    pub pot_file: PathBuf,
    pub output_file: PathBuf,
    pub progress_file: PathBuf,
    pub plot_file: PathBuf,
}

impl Job {
    /// Serialized form for the startup log line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

pub fn parse_interval(raw: &str) -> Result<NonZeroUsize> {
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid analysis interval <{}>", raw))?;
    NonZeroUsize::new(value).context("Analysis interval must be at least 1")
}

pub fn parse_ceiling(raw: &str) -> Result<Option<u64>> {
    let raw = raw.trim();
    if UNBOUNDED_CEILING_TOKENS.contains(&raw) {
        return Ok(None);
    }
    let ceiling = raw
        .parse::<u64>()
        .with_context(|| format!("Invalid termination ceiling <{}>", raw))?;
    if ceiling == 0 {
        bail!("Termination ceiling must be at least 1, use None for an unbounded run");
    }
    Ok(Some(ceiling))
}
