pub const APP_NAME: &str = "guesswatch";

pub const CONFIG_ENV_PREFIX: &str = "GUESSWATCH";
pub const CONFIG_FILE_ENV: &str = "GUESSWATCH_CONFIG";

pub const LOG_FILE_NAME: &str = "guesswatch.log";
pub const LOG_LEVEL: &str = "debug";
pub const FALLBACK_WORKING_DIR: &str = "/tmp/guesswatch/";

/// Literal the guesser wrappers pass when no termination ceiling applies.
pub const UNBOUNDED_CEILING_TOKENS: [&str; 4] = ["None", "none", "-", ""];
