//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

use super::HarnessConfig;
use crate::output::ReportFormat;
use crate::utils::LogLevel;

/// Environment variable prefix
const ENV_PREFIX: &str = "TESTBATCH";

/// Overrides read from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Report format from TESTBATCH_FORMAT
    pub format: Option<ReportFormat>,
    /// Log level from TESTBATCH_LOG
    pub log_level: Option<LogLevel>,
    /// Timing lines from TESTBATCH_TIMING
    pub show_timing: Option<bool>,
    /// Config file from TESTBATCH_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            format: get_env("FORMAT").and_then(|v| ReportFormat::from_str(&v)),
            log_level: get_env("LOG").and_then(|v| LogLevel::from_str(&v)),
            show_timing: get_env_bool("TIMING"),
            config_file: get_env("CONFIG"),
        }
    }

    /// Override the fields of `config` that are set here
    pub fn apply(&self, mut config: HarnessConfig) -> HarnessConfig {
        if let Some(format) = self.format {
            config.report_format = format;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(timing) = self.show_timing {
            config.show_timing = timing;
        }
        config
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}
