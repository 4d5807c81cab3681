use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use eqgen_core::{OperatorMode, RangeChecker};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "eqgen_config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `a + b = c` line per equation
    #[default]
    Text,
    /// Single JSON document
    Json,
}

/// Parses the `--operator-mode` flag using the config file spelling.
pub fn parse_operator_mode(s: &str) -> Result<OperatorMode, String> {
    match s {
        "from-kind" => Ok(OperatorMode::FromKind),
        "independent" => Ok(OperatorMode::Independent),
        other => Err(format!(
            "unknown operator mode '{}' (expected from-kind or independent)",
            other
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EqgenConfig {
    pub min: i32,
    pub max: i32,
    pub operator_mode: OperatorMode,
    pub format: OutputFormat,
}

impl Default for EqgenConfig {
    fn default() -> Self {
        Self {
            min: RangeChecker::DEFAULT_MIN,
            max: RangeChecker::DEFAULT_MAX,
            operator_mode: OperatorMode::FromKind,
            format: OutputFormat::Text,
        }
    }
}

impl EqgenConfig {
    /// Loads configuration.
    ///
    /// An explicit path must exist and parse. Without one, `eqgen_config.toml`
    /// in the working directory is used if present; problems with that file
    /// only produce a warning and the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let config = Self::parse(&content)
                .with_context(|| format!("failed to parse config file {}", path.display()))?;
            info!(path = %path.display(), "loaded config");
            return Ok(config);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match Self::parse(&content) {
                    Ok(config) => {
                        info!(path = %path.display(), "loaded config");
                        return Ok(config);
                    }
                    Err(e) => warn!("Error parsing config file: {}. Using defaults.", e),
                },
                Err(e) => warn!("Error reading config file: {}. Using defaults.", e),
            }
        }
        Ok(Self::default())
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn checker(&self) -> Result<RangeChecker> {
        RangeChecker::new(self.min, self.max).context("invalid range in configuration")
    }
}
