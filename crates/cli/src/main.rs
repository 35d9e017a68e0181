//! Guild roster command-line tool
//!
//! Scores stat snapshots and keeps the roster of tracked characters.
//! Run with: `roster <command>`

mod commands;
mod dirs;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Add, List, Remove, Rescore, Score, Show};
use roster::RosterConfig;

/// Guild roster combat score tracker
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Track item level and combat score of guild characters", long_about = None)]
#[command(version)]
struct Cli {
    /// Roster JSON file (overrides ROSTER_DATA_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Compute the combat score of one stat snapshot
    Score(Score),

    /// List tracked characters
    List(List),

    /// Start tracking a character
    Add(Add),

    /// Stop tracking a character
    Remove(Remove),

    /// Show one character with its history
    Show(Show),

    /// Score every tracked character from a stat feed
    Rescore(Rescore),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ROSTER_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = RosterConfig::from_env();
    if let Some(path) = cli.data_file {
        config.data_file = Some(path);
    }

    let _guard = logging::setup(config.log_dir.as_deref())?;

    match cli.command {
        Command::Score(cmd) => cmd.execute(&config),
        Command::List(cmd) => cmd.execute(&config),
        Command::Add(cmd) => cmd.execute(&config),
        Command::Remove(cmd) => cmd.execute(&config),
        Command::Show(cmd) => cmd.execute(&config),
        Command::Rescore(cmd) => cmd.execute(&config),
    }
}
