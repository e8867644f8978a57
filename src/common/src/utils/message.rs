//! A collection of macros for printing messages to the console with different styles.
//!
//! Everything goes to stderr: stdout of the monitor may be part of the
//! guesser pipeline.
#[macro_export]
macro_rules! success_message {
    ($($arg:tt)*) => {
        eprintln!("{} {}", "[SUCCESS]".green().bold(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! error_message {
    ($($arg:tt)*) => {
        eprintln!("{} {}", "  [ERROR]".red().bold(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! warning_message {
    ($($arg:tt)*) => {
        eprintln!("{} {}", "[WARNING]".yellow().bold(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! info_message {
    ($($arg:tt)*) => {
        eprintln!("{} {}", "   [INFO]".cyan().bold(), format!($($arg)*));
    };
}
