//! Command implementations for the roster CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod add;
mod list;
mod remove;
mod rescore;
mod score;
mod show;

pub use add::Add;
pub use list::List;
pub use remove::Remove;
pub use rescore::Rescore;
pub use score::Score;
pub use show::Show;

use anyhow::{Context, Result};
use roster::{FileRosterRepository, RosterConfig, RosterService};
use score_core::ScoreEngine;

use crate::dirs;

/// Open the file-backed roster service described by `config`.
pub(crate) fn open_service(config: &RosterConfig) -> Result<RosterService<FileRosterRepository>> {
    let data_file = config
        .data_file
        .clone()
        .unwrap_or_else(dirs::default_data_file);
    let score_config = config
        .load_score_config()
        .context("Failed to load score config")?;

    tracing::debug!("Using roster file {}", data_file.display());
    Ok(RosterService::new(
        FileRosterRepository::new(data_file),
        ScoreEngine::new(score_config),
        config.history_retention(),
    ))
}

/// Display form of an optional number.
pub(crate) fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
