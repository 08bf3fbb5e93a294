//! # lectern-cli
//!
//! The `lectern` command: search course notes, browse the outline and read
//! documents from the terminal.
//!
//! - `search`: one query, printed as highlighted text, plain text or JSON
//! - `shell`: an interactive session with query history
//! - `chapters` / `open`: the course outline and single documents
//! - `config`: inspect and edit the TOML configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use cli::{Args, Command, ConfigAction};
pub use config::LecternConfig;
pub use error::{Error, Result};

use commands::search::OutputFormat;
use lectern_core::ConfigManager;

/// Execute a parsed command line.
pub async fn run(args: Args, config: &LecternConfig) -> Result<()> {
    match args.command {
        Command::Search { query, json, plain } => {
            commands::cmd_search(config, &query, OutputFormat::from_flags(json, plain)).await
        }
        Command::Shell { plain } => commands::cmd_shell(config, plain).await,
        Command::Chapters => commands::cmd_chapters(config).await,
        Command::Open { chapter, document } => {
            commands::cmd_open(config, &chapter, &document).await
        }
        Command::Config { action } => {
            Ok(config_handlers::handle_config_command(args.config.as_deref(), action)?)
        }
    }
}

/// Load configuration for a command line.
pub fn load_config(args: &Args) -> Result<LecternConfig> {
    Ok(LecternConfig::load(args.config.as_deref())?)
}
