#![allow(dead_code)]

use anyhow::{bail, Result};
use guesswatch_common::analysis::AnalysisStrategy;
use guesswatch_common::job::{Job, PasswordFormat};
use guesswatch_monitor::ProcessTable;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const GUESSER_PID: u32 = 4242;

/// Every call the dispatcher made, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Candidates(Vec<String>),
    StatusLine(String),
    Report,
}

#[derive(Default)]
pub struct RecordingStrategy {
    pub calls: Vec<Call>,
    pub fail_batches: bool,
}

impl RecordingStrategy {
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Candidates(batch) => Some(batch.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn status_lines(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::StatusLine(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn reports(&self) -> usize {
        self.calls.iter().filter(|call| **call == Call::Report).count()
    }
}

impl AnalysisStrategy for RecordingStrategy {
    fn process_candidates(&mut self, batch: &[String]) -> Result<()> {
        assert!(!batch.is_empty(), "empty batch forwarded");
        assert!(
            !self.calls.contains(&Call::Report),
            "batch forwarded after the report"
        );
        self.calls.push(Call::Candidates(batch.to_vec()));
        if self.fail_batches {
            bail!("analysis backend unavailable");
        }
        Ok(())
    }

    fn process_status_line(&mut self, line: &str) -> Result<()> {
        assert!(
            !self.calls.contains(&Call::Report),
            "status line forwarded after the report"
        );
        self.calls.push(Call::StatusLine(line.to_string()));
        Ok(())
    }

    fn gen_report(&mut self) -> Result<()> {
        self.calls.push(Call::Report);
        Ok(())
    }
}

/// In-memory process table recording the order of kill signals.
#[derive(Default)]
pub struct FakeProcessTable {
    pub processes: Vec<(u32, Option<u32>)>,
    pub failing: HashSet<u32>,
    pub kills: Vec<u32>,
    pub snapshots: usize,
}

impl FakeProcessTable {
    pub fn with_processes(processes: Vec<(u32, Option<u32>)>) -> Self {
        Self {
            processes,
            ..Default::default()
        }
    }

    /// Guesser with two children, each having one child of its own.
    pub fn guesser_tree() -> Self {
        Self::with_processes(vec![
            (1, None),
            (GUESSER_PID, Some(1)),
            (5001, Some(GUESSER_PID)),
            (5002, Some(GUESSER_PID)),
            (6001, Some(5001)),
            (6002, Some(5002)),
            (7000, Some(1)),
        ])
    }
}

impl ProcessTable for FakeProcessTable {
    fn snapshot(&mut self) -> Vec<(u32, Option<u32>)> {
        self.snapshots += 1;
        self.processes.clone()
    }

    fn kill(&mut self, pid: u32) -> Result<()> {
        self.kills.push(pid);
        if self.failing.contains(&pid) {
            bail!("ESRCH: No such process");
        }
        Ok(())
    }
}

pub fn job(format: PasswordFormat, interval: usize, ceiling: Option<u64>) -> Job {
    Job {
        label: "test-job".to_string(),
        format,
        password_file: PathBuf::from("leak.txt"),
        guesser_pid: GUESSER_PID,
        interval: NonZeroUsize::new(interval).unwrap(),
        ceiling,
        pot_file: PathBuf::from("john.pot"),
        output_file: PathBuf::from("output.txt"),
        progress_file: PathBuf::from("progress.csv"),
        plot_file: PathBuf::from("plot.png"),
    }
}

pub fn candidates(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("candidate{}", i)).collect()
}

pub fn stream(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}
