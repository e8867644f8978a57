mod hash;
mod plaintext;
mod progress;
mod report;

pub use hash::HashAnalysis;
pub use plaintext::PlaintextAnalysis;
pub use report::AnalysisReport;

use crate::fileparser::ParsedPasswords;
use anyhow::Result;
use guesswatch_common::analysis::AnalysisStrategy;
use guesswatch_common::job::{FileType, Job};

/// The analysis strategies a run can use, chosen from the detected file type.
pub enum AnalysisScheme {
    Plaintext(PlaintextAnalysis),
    Hash(HashAnalysis),
}

impl AnalysisScheme {
    pub fn for_job(job: &Job, file_type: FileType, parsed: ParsedPasswords) -> Result<Self> {
        Ok(match file_type {
            FileType::Plaintext => AnalysisScheme::Plaintext(PlaintextAnalysis::new(job, parsed)?),
            FileType::HashValues => AnalysisScheme::Hash(HashAnalysis::new(job, parsed)?),
        })
    }
}

impl AnalysisStrategy for AnalysisScheme {
    fn process_candidates(&mut self, batch: &[String]) -> Result<()> {
        match self {
            AnalysisScheme::Plaintext(scheme) => scheme.process_candidates(batch),
            AnalysisScheme::Hash(scheme) => scheme.process_candidates(batch),
        }
    }

    fn process_status_line(&mut self, line: &str) -> Result<()> {
        match self {
            AnalysisScheme::Plaintext(scheme) => scheme.process_status_line(line),
            AnalysisScheme::Hash(scheme) => scheme.process_status_line(line),
        }
    }

    fn gen_report(&mut self) -> Result<()> {
        match self {
            AnalysisScheme::Plaintext(scheme) => scheme.gen_report(),
            AnalysisScheme::Hash(scheme) => scheme.gen_report(),
        }
    }
}
