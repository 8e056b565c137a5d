use anyhow::Result;
use clap::Parser;

use cwd_tree::cli::Cli;
use cwd_tree::commands;
use cwd_tree::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet, &config.logging.level);

    tracing::debug!(?config, "Loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::tree::run(&config, &mut out)?;

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool, configured: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn".to_string()
    } else {
        match verbosity {
            0 => configured.to_lowercase(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cwd_tree={}", level)));

    // stdout carries the tree
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
