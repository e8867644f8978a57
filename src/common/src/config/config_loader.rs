use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_FILE_ENV};
use anyhow::{Context, Result};
use config::{Config as RConfig, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings of the monitor process itself. Everything about the run comes
/// from the command line instead.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MonitorConfig {
    pub log_dir: PathBuf,
    pub log_file_name: String,
    pub log_level: String,
    pub stderr_logging: bool,
}

impl MonitorConfig {
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the TOML file named by `GUESSWATCH_CONFIG` (if any),
    /// then `GUESSWATCH_*` environment variables.
    pub fn load_default_config() -> Result<MonitorConfig> {
        Self::load(std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from))
    }

    pub fn load(config_file: Option<PathBuf>) -> Result<MonitorConfig> {
        let defaults = MonitorConfig::default();
        let mut builder = RConfig::builder();

        builder = builder
            .set_default("log_dir", defaults.log_dir.to_string_lossy().to_string())?
            .set_default("log_file_name", defaults.log_file_name)?
            .set_default("log_level", defaults.log_level)?
            .set_default("stderr_logging", defaults.stderr_logging)?;

        if let Some(path) = config_file {
            builder = builder.add_source(
                File::from(path.clone())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(Environment::with_prefix(CONFIG_ENV_PREFIX).try_parsing(true));

        builder
            .build()
            .context("failed to build monitor configuration")?
            .try_deserialize()
            .context("failed to parse monitor configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LOG_FILE_NAME, LOG_LEVEL};
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    #[serial]
    fn test_default_config() {
        let config = ConfigLoader::load(None).unwrap();
        assert_eq!(config.log_file_name, LOG_FILE_NAME);
        assert_eq!(config.log_level, LOG_LEVEL);
        assert!(config.stderr_logging);
        assert!(config.log_file().ends_with(LOG_FILE_NAME));
        assert_eq!(config.log_dir, MonitorConfig::default().log_dir);
    }

    #[test]
    #[serial]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_dir = \"/var/tmp/gw\"\nlog_level = \"info\"\nstderr_logging = false").unwrap();

        let config = ConfigLoader::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/var/tmp/gw"));
        assert_eq!(config.log_level, "info");
        assert!(!config.stderr_logging);
        assert_eq!(config.log_file_name, LOG_FILE_NAME);
    }

    #[test]
    #[serial]
    fn test_missing_config_file_is_an_error() {
        let result = ConfigLoader::load(Some(PathBuf::from("/nonexistent/guesswatch.toml")));
        assert!(result.is_err());
    }
}
