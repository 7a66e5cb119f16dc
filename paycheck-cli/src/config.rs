//! Optional TOML defaults for the `paycheck` command.
//!
//! ```toml
//! year = 2026
//! status = "MFJ"
//! state = "CA"
//! frequency = "biweekly"
//! hours_per_week = 40
//! format = "text"
//! brackets = "tables/brackets.csv"
//! deductions = "tables/deductions.csv"
//!
//! [log]
//! level = "info"
//! file = "paycheck.log"
//! ```
//!
//! Every key is optional. Command-line flags always win over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::cli::OutputFormat;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "paycheck.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaycheckConfig {
    pub year: Option<i32>,
    pub status: Option<String>,
    pub state: Option<String>,
    pub frequency: Option<String>,
    pub hours_per_week: Option<Decimal>,
    pub format: Option<OutputFormat>,
    pub brackets: Option<PathBuf>,
    pub deductions: Option<PathBuf>,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl PaycheckConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Reads `path`. Relative table paths are resolved against the config
    /// file's directory.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        debug!(path = %path.display(), "config loaded");

        Ok(config)
    }

    /// Loads the explicit `--config` path, else `paycheck.toml` in the
    /// working directory if it exists, else the empty config.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn resolve_paths(
        &mut self,
        base: &Path,
    ) {
        for path in [&mut self.brackets, &mut self.deductions, &mut self.log.file]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_full_config() {
        let config = PaycheckConfig::from_toml_str(
            r#"
            year = 2026
            status = "MFJ"
            state = "ca"
            frequency = "hourly"
            hours_per_week = 37.5
            format = "json"
            brackets = "brackets.csv"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.year, Some(2026));
        assert_eq!(config.status.as_deref(), Some("MFJ"));
        assert_eq!(config.state.as_deref(), Some("ca"));
        assert_eq!(config.hours_per_week, Some(dec!(37.5)));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.brackets, Some(PathBuf::from("brackets.csv")));
        assert_eq!(config.deductions, None);
        assert_eq!(config.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(PaycheckConfig::from_toml_str("").unwrap(), PaycheckConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PaycheckConfig::from_toml_str("colour = \"blue\"").is_err());
    }

    #[test]
    fn relative_paths_follow_config_dir() {
        let mut config = PaycheckConfig {
            brackets: Some(PathBuf::from("b.csv")),
            deductions: Some(PathBuf::from("/abs/d.csv")),
            ..PaycheckConfig::default()
        };

        config.resolve_paths(Path::new("/etc/paycheck"));

        assert_eq!(config.brackets, Some(PathBuf::from("/etc/paycheck/b.csv")));
        assert_eq!(config.deductions, Some(PathBuf::from("/abs/d.csv")));
    }
}
