pub mod fileparser;
pub mod schemes;

pub use fileparser::{InputParser, ParsedPasswords};
pub use schemes::AnalysisScheme;
