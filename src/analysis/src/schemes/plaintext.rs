use super::progress::ProgressLog;
use super::report::{percentage, AnalysisReport};
use crate::fileparser::ParsedPasswords;
use anyhow::Result;
use chrono::{DateTime, Utc};
use guesswatch_common::analysis::AnalysisStrategy;
use guesswatch_common::job::{FileType, Job};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Scores generated candidates against a plaintext leak.
pub struct PlaintextAnalysis {
    label: String,
    /// Leaked passwords not guessed yet, with their account counts.
    remaining: HashMap<String, u64>,
    accounts: u64,
    parse_errors: u64,
    candidates: u64,
    cracked_accounts: u64,
    cracked_distinct: u64,
    progress: ProgressLog,
    output_file: PathBuf,
    started_at: DateTime<Utc>,
}

impl PlaintextAnalysis {
    pub fn new(job: &Job, parsed: ParsedPasswords) -> Result<Self> {
        Ok(Self {
            label: job.label.clone(),
            remaining: parsed.passwords,
            accounts: parsed.total,
            parse_errors: parsed.errors,
            candidates: 0,
            cracked_accounts: 0,
            cracked_distinct: 0,
            progress: ProgressLog::create(&job.progress_file, "candidates,cracked_accounts,cracked_percentage")?,
            output_file: job.output_file.clone(),
            started_at: Utc::now(),
        })
    }

    pub fn candidates(&self) -> u64 {
        self.candidates
    }

    pub fn cracked_accounts(&self) -> u64 {
        self.cracked_accounts
    }

    pub fn cracked_distinct(&self) -> u64 {
        self.cracked_distinct
    }
}

impl AnalysisStrategy for PlaintextAnalysis {
    fn process_candidates(&mut self, batch: &[String]) -> Result<()> {
        for candidate in batch {
            self.candidates += 1;
            // a repeated guess of an already cracked password scores nothing
            if let Some(accounts) = self.remaining.remove(candidate) {
                self.cracked_accounts += accounts;
                self.cracked_distinct += 1;
            }
        }

        self.progress.append(&format!(
            "{},{},{:.4}",
            self.candidates,
            self.cracked_accounts,
            percentage(self.cracked_accounts, self.accounts)
        ))
    }

    fn process_status_line(&mut self, line: &str) -> Result<()> {
        debug!("Ignoring status line in plaintext analysis: {}", line);
        Ok(())
    }

    fn gen_report(&mut self) -> Result<()> {
        let report = AnalysisReport {
            label: self.label.clone(),
            file_type: FileType::Plaintext.to_string(),
            started_at: self.started_at,
            finished_at: Utc::now(),
            candidates: self.candidates,
            accounts: self.accounts,
            cracked_accounts: self.cracked_accounts,
            cracked_distinct: self.cracked_distinct,
            cracked_percentage: percentage(self.cracked_accounts, self.accounts),
            parse_errors: self.parse_errors,
        };
        report.write(&self.output_file)?;
        info!(
            "Job <{}>: {} of {} accounts cracked with {} candidates",
            self.label, self.cracked_accounts, self.accounts, self.candidates
        );
        Ok(())
    }
}
