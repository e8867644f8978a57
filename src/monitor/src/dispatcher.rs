use crate::batcher::CandidateBatcher;
use crate::process::{ProcessTable, ProcessTerminator};
use crate::status_line::{self, LineKind, ProgressReport};
use crate::termination::TerminationGuard;
use anyhow::{bail, Context, Result};
use guesswatch_common::analysis::AnalysisStrategy;
use guesswatch_common::job::{FileType, Job};
use std::io::BufRead;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPhase {
    AwaitingFormat,
    Running(FileType),
    Terminating,
    Closed,
}

/// Why the read loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The guesser closed its output.
    StreamEnded,
    /// The termination ceiling was hit at `count` candidates.
    CeilingReached { count: u64 },
    /// The cracking tool reported that every target hash was cracked.
    SessionCompleted,
}

/// Last progress reported by the cracking tool. Never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    candidates: u64,
    guesses: u64,
}

impl ProgressState {
    fn observe(&mut self, report: ProgressReport) {
        self.candidates = self.candidates.max(report.candidates);
        self.guesses = self.guesses.max(report.guesses);
    }

    pub fn candidates(&self) -> u64 {
        self.candidates
    }

    pub fn guesses(&self) -> u64 {
        self.guesses
    }
}

/// Drives one benchmark run: reads the guesser's output, feeds the analysis
/// strategy and stops the guesser once the termination ceiling is reached.
pub struct StreamDispatcher<S: AnalysisStrategy, T: ProcessTable> {
    job: Job,
    mode: FileType,
    phase: DispatchPhase,
    strategy: S,
    terminator: ProcessTerminator<T>,
    batcher: CandidateBatcher,
    guard: TerminationGuard,
    progress: ProgressState,
}

impl<S: AnalysisStrategy, T: ProcessTable> StreamDispatcher<S, T> {
    pub fn new(job: Job, mode: FileType, strategy: S, terminator: ProcessTerminator<T>) -> Self {
        let guard = TerminationGuard::new(job.ceiling, mode);
        if !guard.is_bounded() {
            warn!(
                "The guesser might run in endless mode as the termination ceiling of job <{}> is not set",
                job.label
            );
        }

        Self {
            batcher: CandidateBatcher::new(job.interval),
            job,
            mode,
            phase: DispatchPhase::AwaitingFormat,
            strategy,
            terminator,
            guard,
            progress: ProgressState::default(),
        }
    }

    /// Consumes the guesser stream until it ends, the ceiling is reached or the
    /// cracking tool finishes, then generates the report. A dispatcher runs once.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<RunOutcome> {
        if self.phase != DispatchPhase::AwaitingFormat {
            bail!("dispatcher for job <{}> has already run", self.job.label);
        }
        self.phase = DispatchPhase::Running(self.mode);
        info!(
            "Starting {} analysis of job <{}> (interval {}, ceiling {:?}, guesser pid {})",
            self.mode,
            self.job.label,
            self.job.interval,
            self.job.ceiling,
            self.job.guesser_pid
        );

        let outcome = match self.mode {
            FileType::Plaintext => self.run_plaintext(&mut reader),
            FileType::HashValues => self.run_hash(&mut reader),
        };
        info!("Stream processing of job <{}> stopped: {:?}", self.job.label, outcome);

        self.phase = DispatchPhase::Closed;
        self.strategy
            .gen_report()
            .context("Failed to generate the analysis report")?;
        Ok(outcome)
    }

    fn run_plaintext<R: BufRead>(&mut self, reader: &mut R) -> RunOutcome {
        let mut buf = Vec::new();
        let mut outcome = RunOutcome::StreamEnded;

        while read_line(reader, &mut buf) {
            let candidate = String::from_utf8_lossy(&buf);
            if let Some(batch) = self.batcher.append(&candidate) {
                forward_batch(&mut self.strategy, batch);
            }

            let count = self.batcher.total();
            if self.guard.should_terminate(count) {
                debug!("Breaking loop at candidate number {}", count);
                self.stop_guesser();
                outcome = RunOutcome::CeilingReached { count };
                break;
            }
        }

        if let Some(batch) = self.batcher.flush_partial() {
            forward_batch(&mut self.strategy, batch);
        }
        outcome
    }

    fn run_hash<R: BufRead>(&mut self, reader: &mut R) -> RunOutcome {
        let mut buf = Vec::new();
        let mut last_line: Option<String> = None;

        while read_line(reader, &mut buf) {
            let line = String::from_utf8_lossy(&buf).into_owned();
            match status_line::classify(&line) {
                LineKind::Ignored => {}
                LineKind::SessionComplete => {
                    warn!("Breaking loop as a 'Session completed' line was received");
                    // all hashes are cracked but the guesser itself may still be alive
                    if self.guard.is_bounded() {
                        self.stop_guesser();
                    }
                    return RunOutcome::SessionCompleted;
                }
                LineKind::Progress(report) => {
                    self.progress.observe(report);
                    let count = self.progress.candidates();
                    if self.guard.should_terminate(count) {
                        debug!("Breaking loop at candidate number {}", count);
                        self.stop_guesser();
                        return RunOutcome::CeilingReached { count };
                    }
                    forward_status_line(&mut self.strategy, &line);
                }
            }
            last_line = Some(line);
        }

        if let Some(line) = last_line {
            forward_status_line(&mut self.strategy, &line);
        }
        RunOutcome::StreamEnded
    }

    fn stop_guesser(&mut self) {
        self.phase = DispatchPhase::Terminating;
        self.terminator.terminate(self.job.guesser_pid);
    }

    pub fn phase(&self) -> DispatchPhase {
        self.phase
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn candidates_seen(&self) -> u64 {
        self.batcher.total()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn terminator(&self) -> &ProcessTerminator<T> {
        &self.terminator
    }
}

/// Reads the next line into `buf` without its trailing `\n`.
/// Returns false at end of stream; a read error ends the stream as well.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> bool {
    buf.clear();
    match reader.read_until(b'\n', buf) {
        Ok(0) => false,
        Ok(_) => {
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            true
        }
        Err(e) => {
            error!("Failed to read from the guesser stream, treating it as closed: {}", e);
            false
        }
    }
}

fn forward_batch<S: AnalysisStrategy>(strategy: &mut S, batch: &[String]) {
    if let Err(e) = strategy.process_candidates(batch) {
        error!("Analysis of a batch of {} candidates failed: {:#}", batch.len(), e);
    }
}

fn forward_status_line<S: AnalysisStrategy>(strategy: &mut S, line: &str) {
    if let Err(e) = strategy.process_status_line(line) {
        error!("Analysis of status line <{}> failed: {:#}", line, e);
    }
}
