mod table;
mod terminator;
mod tree;

pub use table::{ProcessTable, SystemProcessTable};
pub use terminator::{ProcessTerminator, TerminationReport};
pub use tree::ProcessTree;
