use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only CSV of the run's progress, flushed after every row so that a
/// killed run still leaves a usable file.
pub(super) struct ProgressLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ProgressLog {
    pub fn create(path: &Path, header: &str) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create progress file {:?}", path))?;
        let mut log = Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        };
        log.append(header)?;
        Ok(log)
    }

    pub fn append(&mut self, row: &str) -> Result<()> {
        writeln!(self.writer, "{}", row)
            .and_then(|_| self.writer.flush())
            .with_context(|| format!("Failed to write progress file {:?}", self.path))
    }
}
