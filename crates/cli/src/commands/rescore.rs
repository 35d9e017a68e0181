//! Score every tracked character from a stat feed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roster::{RosterConfig, load_feed};

use super::open_service;

#[derive(Parser)]
pub struct Rescore {
    /// Feed document: JSON object of character name → stat record
    #[arg(value_name = "FEED")]
    feed: PathBuf,
}

impl Rescore {
    pub fn execute(self, config: &RosterConfig) -> Result<()> {
        let feed = load_feed(&self.feed)
            .with_context(|| format!("Failed to load feed: {}", self.feed.display()))?;
        let service = open_service(config)?;
        let summary = service.rescore(&feed)?;

        println!(
            "{} {} characters",
            style("Rescored:").bold().cyan(),
            summary.total()
        );
        for name in &summary.scored {
            let score = service.character(name)?.combat_score;
            println!(
                "  {} {:<20} {}",
                style("✓").green(),
                name,
                score.map_or_else(String::new, |s| s.to_string())
            );
        }
        for (name, reason) in &summary.rejected {
            println!(
                "  {} {:<20} score not computed: {}",
                style("✗").red(),
                name,
                reason
            );
        }
        for name in &summary.missing {
            println!(
                "  {} {:<20} no feed record",
                style("-").dim(),
                name
            );
        }
        Ok(())
    }
}
