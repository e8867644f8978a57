use guesswatch_cli::process_command::process_cli;
use guesswatch_common::{error_message, Colorize};

pub fn main() {
    if let Err(e) = process_cli() {
        error_message!("{:#}", e);
        std::process::exit(1);
    }
}
