use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fitstats::{cli::Cli, commands};

fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::run(cli)
}
