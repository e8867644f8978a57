//! Classification of the cracking tool's live output.
//!
//! Progress lines look like
//! `736g 4008p 0:00:00:04  152.0g/s 828.0p/s 828.0c/s 885086C/s carama..marcia`:
//! cracked guesses, then candidates processed, then timing and rates.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PROGRESS_LINE: Regex = Regex::new(r"^([0-9]+)g(?-u:\s)([0-9]+)p").unwrap();
}

const SESSION_COMPLETED: &str = "Session completed";

/// The cracking tool reports candidates with a granularity of a thousand, so
/// the low three digits carry no information.
const PROGRESS_GRANULARITY: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReport {
    /// Hashes cracked so far (`<digits>g`).
    pub guesses: u64,
    /// Candidates processed, truncated to whole thousands (`<digits>p`).
    pub candidates: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Progress(ProgressReport),
    SessionComplete,
    Ignored,
}

/// Truncates a raw candidates count to whole thousands.
///
/// Matches the tool-side convention of replacing the last three digits with
/// `000`, so counts below a thousand become zero.
pub fn coarse_count(raw: u64) -> u64 {
    raw / PROGRESS_GRANULARITY * PROGRESS_GRANULARITY
}

pub fn classify(line: &str) -> LineKind {
    if let Some(captures) = PROGRESS_LINE.captures(line) {
        let guesses = captures[1].parse::<u64>();
        let candidates = captures[2].parse::<u64>();
        return match (guesses, candidates) {
            (Ok(guesses), Ok(candidates)) => LineKind::Progress(ProgressReport {
                guesses,
                candidates: coarse_count(candidates),
            }),
            // digits overflowing u64 are not something the tool emits
            _ => LineKind::Ignored,
        };
    }

    if line.contains(SESSION_COMPLETED) {
        LineKind::SessionComplete
    } else {
        LineKind::Ignored
    }
}
