use anyhow::{bail, Context, Result};
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid as NixPid;
use sysinfo::{ProcessesToUpdate, System};

/// View of the host's process table used when tearing down the guesser.
pub trait ProcessTable {
    /// Refreshes the table and returns `(pid, parent pid)` for every live process.
    fn snapshot(&mut self) -> Vec<(u32, Option<u32>)>;

    /// Sends an uncatchable kill signal to `pid`.
    fn kill(&mut self, pid: u32) -> Result<()>;
}

/// Process table backed by `sysinfo`, signalling through `kill(2)`.
pub struct SystemProcessTable {
    system: System,
}

impl SystemProcessTable {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SystemProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable for SystemProcessTable {
    fn snapshot(&mut self) -> Vec<(u32, Option<u32>)> {
        self.system.refresh_processes(ProcessesToUpdate::All, true);

        self.system
            .processes()
            .iter()
            // sysinfo lists threads as processes on Linux; they die with their process
            .filter(|(_, process)| process.thread_kind().is_none())
            .map(|(pid, process)| (pid.as_u32(), process.parent().map(|p| p.as_u32())))
            .collect()
    }

    fn kill(&mut self, pid: u32) -> Result<()> {
        // kill(0) and kill(-1) address whole process groups
        if pid == 0 {
            bail!("refusing to signal pid 0");
        }
        let raw = i32::try_from(pid).with_context(|| format!("pid {} out of range", pid))?;

        signal::kill(NixPid::from_raw(raw), Signal::SIGKILL)
            .with_context(|| format!("Failed to send SIGKILL to pid {}", pid))
    }
}
