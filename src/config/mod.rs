//! Configuration module
//!
//! Handles loading and managing harness configuration.

mod env;

pub use env::EnvConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::output::{ReportFormat, ResultFormatter};
use crate::utils::LogLevel;

/// Harness configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Format of traces and summaries
    pub report_format: ReportFormat,

    /// Log level used by binaries that install a subscriber
    pub log_level: LogLevel,

    /// Print each test's duration after its result
    pub show_timing: bool,
}

impl HarnessConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read config file")?;

        let config: Self = if is_yaml(path.as_ref()) {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON config")?
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = if is_yaml(path.as_ref()) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Configuration from `TESTBATCH_CONFIG` (if set) with the other
    /// `TESTBATCH_*` variables applied on top.
    ///
    /// An unreadable config file is logged and replaced by defaults.
    pub fn from_env() -> Self {
        let env = EnvConfig::load();

        let base = match &env.config_file {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                warn!("Ignoring config file {}: {:#}", path, e);
                Self::default()
            }),
            None => Self::default(),
        };

        env.apply(base)
    }

    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new(self.report_format).with_timing(self.show_timing)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
