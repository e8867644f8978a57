use crate::commands::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use guesswatch_analysis::{AnalysisScheme, InputParser};
use guesswatch_common::config::ConfigLoader;
use guesswatch_common::logging::setup_logging;
use guesswatch_common::{info_message, success_message, warning_message, Colorize};
use guesswatch_monitor::{ProcessTerminator, RunOutcome, StreamDispatcher, SystemProcessTable};

pub fn process_cli() -> Result<()> {
    let cli = Cli::parse();
    let job = cli.into_job()?;

    let config = ConfigLoader::load_default_config()?;
    setup_logging(&config)?;
    tracing::info!("Starting job: {}", job.to_json());

    let parser = InputParser::new(job.format, &job.password_file);
    let file_type = parser.file_type();
    let parsed = parser
        .parse()
        .with_context(|| format!("Failed to read password file {:?}", job.password_file))?;
    info_message!(
        "Loaded {} accounts ({} distinct) from {:?}",
        parsed.total,
        parsed.passwords.len(),
        job.password_file
    );

    let scheme = AnalysisScheme::for_job(&job, file_type, parsed)?;
    let terminator = ProcessTerminator::new(SystemProcessTable::new());
    let output_file = job.output_file.clone();
    let mut dispatcher = StreamDispatcher::new(job, file_type, scheme, terminator);

    let outcome = dispatcher.run(std::io::stdin().lock())?;
    match outcome {
        RunOutcome::StreamEnded => {
            info_message!("Guesser closed its output");
        }
        RunOutcome::CeilingReached { count } => {
            warning_message!("Guesser stopped after {} candidates", count);
        }
        RunOutcome::SessionCompleted => {
            info_message!("Guesser cracked every target hash");
        }
    }
    success_message!("Report written to {:?}", output_file);

    Ok(())
}
