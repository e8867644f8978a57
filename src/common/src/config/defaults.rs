use crate::config::MonitorConfig;
use crate::constants::{APP_NAME, FALLBACK_WORKING_DIR, LOG_FILE_NAME, LOG_LEVEL};
use std::path::PathBuf;

pub fn default_log_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join(APP_NAME),
        None => PathBuf::from(FALLBACK_WORKING_DIR),
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_file_name: LOG_FILE_NAME.to_string(),
            log_level: LOG_LEVEL.to_string(),
            stderr_logging: true,
        }
    }
}
