pub mod analysis;
pub mod config;
pub mod constants;
pub mod job;
pub mod logging;
pub mod utils;

pub use colored::Colorize;
