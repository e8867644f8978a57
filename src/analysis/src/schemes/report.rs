use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Final summary written to the job's output file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub label: String,
    pub file_type: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub candidates: u64,
    pub accounts: u64,
    pub cracked_accounts: u64,
    pub cracked_distinct: u64,
    pub cracked_percentage: f64,
    pub parse_errors: u64,
}

pub(super) fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

impl AnalysisReport {
    pub fn write(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create output file {:?}", path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to serialize report to {:?}", path))?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
