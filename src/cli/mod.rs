//! CLI argument parsing
//!
//! Defines the demo binary's command-line interface using clap.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;

use testbatch::utils::LogLevel;
use testbatch::{HarnessConfig, ReportFormat};

/// Runs a few demonstration test batches
#[derive(Parser, Debug)]
#[command(name = "testbatch-demo")]
#[command(version)]
#[command(about = "Run demonstration test batches and print their reports")]
#[command(long_about = None)]
pub struct Args {
    /// Report format (text, json)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print each test's duration
    #[arg(short, long)]
    pub timing: bool,
}

impl Args {
    /// Merge defaults, config file, environment, then flags
    pub fn resolve_config(&self) -> Result<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::from_env(),
        };

        if let Some(format) = &self.format {
            config.report_format = ReportFormat::from_str(format)
                .ok_or_else(|| anyhow!("Unknown report format: {}", format))?;
        }
        if let Some(level) = &self.log_level {
            config.log_level =
                LogLevel::from_str(level).ok_or_else(|| anyhow!("Unknown log level: {}", level))?;
        }
        if self.timing {
            config.show_timing = true;
        }

        Ok(config)
    }
}
