use anyhow::Result;
use clap::Parser;
use guesswatch_common::job::{parse_ceiling, parse_interval, Job};
use std::path::PathBuf;

/// Arguments handed over by the benchmark harness, all positional.
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "guesswatch",
    version,
    about = "Monitors a password guesser: reads its candidates or status lines from stdin, \
             scores them and stops the guesser once the termination ceiling is reached"
)]
pub struct Cli {
    /// Job label
    pub label: String,

    /// Format of the password file: plaintext_pure, hash_pure or plaintext_withcount
    pub format: String,

    /// File with the leaked passwords or hashes
    pub password_file: PathBuf,

    /// Process id of the guesser
    pub pid: u32,

    /// Number of candidates analysed per batch
    pub interval: String,

    /// Candidates after which the guesser is killed, or `None` to let it run
    pub terminate_guessing: String,

    /// Pot file the cracking tool writes cracked hashes to
    pub pot_file: PathBuf,

    /// Where the final report is written
    pub output_file: PathBuf,

    /// Where progress rows are appended while the run goes on
    pub progress_file: PathBuf,

    /// Plot output of the run
    pub plot_file: PathBuf,
}

impl Cli {
    /// Validates the raw arguments. Any error here is a configuration error.
    pub fn into_job(self) -> Result<Job> {
        Ok(Job {
            format: self.format.parse()?,
            interval: parse_interval(&self.interval)?,
            ceiling: parse_ceiling(&self.terminate_guessing)?,
            label: self.label,
            password_file: self.password_file,
            guesser_pid: self.pid,
            pot_file: self.pot_file,
            output_file: self.output_file,
            progress_file: self.progress_file,
            plot_file: self.plot_file,
        })
    }
}
