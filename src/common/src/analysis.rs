use anyhow::Result;

/// Consumer of the guesser stream.
///
/// The monitor guarantees that `process_candidates` never receives an empty
/// batch and that `gen_report` is called exactly once, after every other call.
pub trait AnalysisStrategy {
    /// Handles one batch of plaintext candidates, in generation order.
    fn process_candidates(&mut self, batch: &[String]) -> Result<()>;

    /// Handles one raw status line of the cracking tool.
    fn process_status_line(&mut self, line: &str) -> Result<()>;

    fn gen_report(&mut self) -> Result<()>;
}

impl<T: AnalysisStrategy + ?Sized> AnalysisStrategy for Box<T> {
    fn process_candidates(&mut self, batch: &[String]) -> Result<()> {
        (**self).process_candidates(batch)
    }

    fn process_status_line(&mut self, line: &str) -> Result<()> {
        (**self).process_status_line(line)
    }

    fn gen_report(&mut self) -> Result<()> {
        (**self).gen_report()
    }
}
