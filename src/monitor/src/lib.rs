pub mod batcher;
pub mod dispatcher;
pub mod process;
pub mod status_line;
pub mod termination;

pub use dispatcher::{DispatchPhase, RunOutcome, StreamDispatcher};
pub use process::{ProcessTable, ProcessTerminator, SystemProcessTable};
