use crate::casing::Casing;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub casing: Casing,
    /// Text inputs matching any of these regexes are passed through unchanged.
    pub ignore_patterns: Vec<String>,
    pub format: OutputFormat,
    pub fail_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            casing: Casing::Kebab,
            ignore_patterns: Vec::new(),
            format: OutputFormat::Text,
            fail_on_error: true,
        }
    }
}

/// One configuration file. Keys left out of the file leave the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileConfig {
    pub casing: Option<Casing>,
    pub ignore_patterns: Option<Vec<String>>,
    pub format: Option<OutputFormat>,
    pub fail_on_error: Option<bool>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Values given on the command line; `None` leaves the file settings alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub casing: Option<Casing>,
    pub format: Option<OutputFormat>,
    pub ignore_patterns: Vec<String>,
    pub no_fail: bool,
}

impl Config {
    /// Load configuration with priority:
    /// CLI args > explicit file > local config > global config > defaults
    pub fn load(explicit: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config = config.merge(FileConfig::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading local config");
            config = config.merge(FileConfig::from_file(&local_path)?);
        }

        // An explicitly named file must exist.
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            config = config.merge(FileConfig::from_file(path)?);
        }

        Ok(config.apply(overrides))
    }

    fn merge(mut self, file: FileConfig) -> Self {
        if let Some(casing) = file.casing {
            self.casing = casing;
        }
        if let Some(patterns) = file.ignore_patterns {
            self.ignore_patterns = patterns;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(fail_on_error) = file.fail_on_error {
            self.fail_on_error = fail_on_error;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(casing) = overrides.casing {
            self.casing = casing;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self.ignore_patterns.extend(overrides.ignore_patterns);
        if overrides.no_fail {
            self.fail_on_error = false;
        }
        self
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
