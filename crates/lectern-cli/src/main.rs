//! Lectern CLI
//!
//! Search and read course notes from the terminal.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use lectern_cli::{Args, Command, LecternConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // A broken config file must not stop `config init --force` from fixing it
    let config = match (&args.command, lectern_cli::load_config(&args)) {
        (_, Ok(config)) => config,
        (Command::Config { .. }, Err(e)) => {
            eprintln!("warning: {e}");
            LecternConfig::default()
        }
        (_, Err(e)) => return Err(e.into()),
    };

    init_logging(args.verbose, &config.logging.level);
    tracing::debug!("Running {:?}", args.command);

    lectern_cli::run(args, &config).await?;
    Ok(())
}

fn init_logging(verbose: bool, configured: &str) {
    let default = if verbose { "debug" } else { configured };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}
