use super::progress::ProgressLog;
use super::report::{percentage, AnalysisReport};
use crate::fileparser::ParsedPasswords;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use guesswatch_common::analysis::AnalysisStrategy;
use guesswatch_common::job::{FileType, Job};
use guesswatch_monitor::status_line::{self, LineKind, ProgressReport};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Follows a cracking tool through its status lines and scores the hashes it
/// cracked, as recorded in its pot file.
pub struct HashAnalysis {
    label: String,
    hashes: HashMap<String, u64>,
    accounts: u64,
    parse_errors: u64,
    pot_file: PathBuf,
    progress: ProgressLog,
    output_file: PathBuf,
    last_line: Option<String>,
    last_report: Option<ProgressReport>,
    started_at: DateTime<Utc>,
}

impl HashAnalysis {
    pub fn new(job: &Job, parsed: ParsedPasswords) -> Result<Self> {
        Ok(Self {
            label: job.label.clone(),
            hashes: parsed.passwords,
            accounts: parsed.total,
            parse_errors: parsed.errors,
            pot_file: job.pot_file.clone(),
            progress: ProgressLog::create(&job.progress_file, "candidates,guesses")?,
            output_file: job.output_file.clone(),
            last_line: None,
            last_report: None,
            started_at: Utc::now(),
        })
    }

    pub fn last_report(&self) -> Option<ProgressReport> {
        self.last_report
    }

    /// Distinct leaked hashes found in the pot file and the accounts they cover.
    fn cracked_from_pot(&self) -> Result<(u64, u64)> {
        if !self.pot_file.exists() {
            warn!("Pot file {:?} does not exist, nothing was cracked", self.pot_file);
            return Ok((0, 0));
        }
        let content = std::fs::read(&self.pot_file)
            .with_context(|| format!("Failed to read pot file {:?}", self.pot_file))?;
        let content = String::from_utf8_lossy(&content);

        let mut cracked = HashSet::new();
        for line in content.lines() {
            if let Some(hash) = pot_hash(line) {
                if self.hashes.contains_key(&hash) {
                    cracked.insert(hash);
                }
            }
        }

        let accounts = cracked.iter().map(|hash| self.hashes[hash]).sum();
        Ok((cracked.len() as u64, accounts))
    }
}

/// Hash part of a `hash:plaintext` pot entry, without a `$format$` tag.
fn pot_hash(line: &str) -> Option<String> {
    let (hash, _) = line.split_once(':')?;
    let hash = match hash.strip_prefix('$') {
        Some(tagged) => tagged.rsplit('$').next().unwrap_or(tagged),
        None => hash,
    };
    if hash.is_empty() {
        None
    } else {
        Some(hash.to_lowercase())
    }
}

impl AnalysisStrategy for HashAnalysis {
    fn process_candidates(&mut self, batch: &[String]) -> Result<()> {
        debug!(
            "Ignoring {} plaintext candidates in hash analysis",
            batch.len()
        );
        Ok(())
    }

    fn process_status_line(&mut self, line: &str) -> Result<()> {
        // the final line of a stream can arrive a second time at close
        if self.last_line.as_deref() == Some(line) {
            return Ok(());
        }
        self.last_line = Some(line.to_string());

        let LineKind::Progress(report) = status_line::classify(line) else {
            debug!("Ignoring non-progress line: {}", line);
            return Ok(());
        };
        self.last_report = Some(report);
        self.progress
            .append(&format!("{},{}", report.candidates, report.guesses))
    }

    fn gen_report(&mut self) -> Result<()> {
        let (cracked_distinct, cracked_accounts) = self.cracked_from_pot()?;
        let candidates = self.last_report.map(|r| r.candidates).unwrap_or(0);

        let report = AnalysisReport {
            label: self.label.clone(),
            file_type: FileType::HashValues.to_string(),
            started_at: self.started_at,
            finished_at: Utc::now(),
            candidates,
            accounts: self.accounts,
            cracked_accounts,
            cracked_distinct,
            cracked_percentage: percentage(cracked_accounts, self.accounts),
            parse_errors: self.parse_errors,
        };
        report.write(&self.output_file)?;
        info!(
            "Job <{}>: {} of {} accounts cracked after about {} candidates",
            self.label, cracked_accounts, self.accounts, candidates
        );
        Ok(())
    }
}
