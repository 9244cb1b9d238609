//! testbatch-demo - runs demonstration batches on the default manager
//!
//! ## Usage
//!
//! ```bash
//! # Text report on stdout
//! testbatch-demo
//!
//! # JSON lines with durations
//! testbatch-demo --format json --timing
//!
//! # Settings from a file
//! testbatch-demo --config testbatch.yaml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod demo;

use cli::Args;
use testbatch::utils::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.resolve_config()?;

    init_logger(config.log_level);
    testbatch::configure_default(&config);

    let _session = testbatch::session();

    demo::register_toggle_tests();
    if let Some(summary) = testbatch::launch()? {
        info!(
            "Toggle batch: {}/{} passed",
            summary.passed(),
            summary.total
        );
    }

    // Launched when `_session` drops.
    demo::register_failure_tests();

    Ok(())
}
