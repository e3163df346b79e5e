pub mod global;
pub mod root_commands;
pub mod subcommands;
pub mod target;

use clap::Parser;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Tavern: campaign notes, links and reference data from the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tav",
    version,
    about = "Tavern - campaign manager client for game masters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format.
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Limit number of results.
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Suppress non-error log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Game to operate on (defaults to `general.default_game`).
    #[arg(short, long, global = true)]
    pub game: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            game: self.game.clone(),
        }
    }
}
