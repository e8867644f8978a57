use crate::process::{ProcessTable, ProcessTree};
use tracing::{debug, info, warn};

/// Outcome of a termination attempt, kept for logging and inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminationReport {
    pub root_found: bool,
    pub killed: Vec<u32>,
    pub failed: Vec<u32>,
}

/// Force-kills the guesser together with every process it spawned.
///
/// Best effort: nothing here is retried and no error leaves this type.
pub struct ProcessTerminator<T: ProcessTable> {
    table: T,
}

impl<T: ProcessTable> ProcessTerminator<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    #[tracing::instrument(skip(self))]
    pub fn terminate(&mut self, root_pid: u32) -> TerminationReport {
        let mut report = TerminationReport::default();

        // the guesser may have forked since the last request
        let snapshot = self.table.snapshot();
        let Some(tree) = ProcessTree::discover(root_pid, &snapshot) else {
            debug!(
                "Parent process with pid {} not found, treating it as already terminated",
                root_pid
            );
            return report;
        };
        report.root_found = true;

        if tree.descendants().is_empty() {
            debug!("No child processes found for pid {}", root_pid);
        }

        for pid in tree.kill_order() {
            match self.table.kill(pid) {
                Ok(()) => {
                    if pid == root_pid {
                        debug!("Killed parent process with pid {}", pid);
                    } else {
                        debug!("Killed child process with pid {}", pid);
                    }
                    report.killed.push(pid);
                }
                Err(e) => {
                    warn!("Could not kill process {}: {:#}", pid, e);
                    report.failed.push(pid);
                }
            }
        }

        info!(
            "Terminated guesser tree of pid {}: {} killed, {} failed",
            root_pid,
            report.killed.len(),
            report.failed.len()
        );
        report
    }
}
