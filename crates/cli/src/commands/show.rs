//! Show one character with its history.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roster::{RosterConfig, ScoreStatus};

use super::{open_service, or_dash};

#[derive(Parser)]
pub struct Show {
    /// Character name
    #[arg(value_name = "NAME")]
    name: String,

    /// Print the stored record as JSON
    #[arg(long)]
    json: bool,
}

impl Show {
    pub fn execute(self, config: &RosterConfig) -> Result<()> {
        let service = open_service(config)?;
        let character = service
            .character(&self.name)
            .with_context(|| format!("Failed to look up {}", self.name))?;

        if self.json {
            let json = serde_json::to_string_pretty(&character)
                .context("Failed to serialize character")?;
            println!("{json}");
            return Ok(());
        }

        println!("{} {}", style("Character:").bold().cyan(), character.name);
        println!("{} {}", style("Server:").bold().cyan(), character.server);
        println!(
            "{} {}",
            style("Item Level:").bold().cyan(),
            or_dash(character.item_level)
        );
        println!(
            "{} {}",
            style("Combat Score:").bold().cyan(),
            or_dash(character.combat_score)
        );
        match &character.status {
            ScoreStatus::Rejected { reason } => println!(
                "{} {} ({})",
                style("Status:").bold().cyan(),
                style(character.status.label()).red(),
                reason
            ),
            status => println!("{} {}", style("Status:").bold().cyan(), status.label()),
        }
        if let Some(at) = character.last_updated {
            println!(
                "{} {}",
                style("Last Updated:").bold().cyan(),
                at.format("%Y-%m-%d %H:%M UTC")
            );
        }
        println!();

        println!("{}", style("History:").bold().yellow());
        if character.history.is_empty() {
            println!("  {}", style("(empty)").dim());
        }
        for entry in character.history.iter().rev() {
            println!(
                "  {}  item level {:>6}  score {:>10}",
                entry.recorded_at.format("%Y-%m-%d %H:%M"),
                or_dash(entry.item_level),
                or_dash(entry.combat_score)
            );
        }
        Ok(())
    }
}
