use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use paycheck_cli::cli::Cli;
use paycheck_cli::config::PaycheckConfig;
use paycheck_cli::{commands, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PaycheckConfig::discover(cli.config.as_deref())?;
    logging::init_logging(
        logging::directive(cli.verbose, config.log.level.as_deref()),
        config.log.file.as_deref(),
    )?;
    debug!(?config, "configuration resolved");

    let output = commands::run(&cli, &config)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;

    Ok(())
}
