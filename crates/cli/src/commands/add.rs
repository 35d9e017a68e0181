//! Start tracking a character.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roster::RosterConfig;

use super::open_service;

#[derive(Parser)]
pub struct Add {
    /// Character name
    #[arg(value_name = "NAME")]
    name: String,

    /// Server label (defaults to ROSTER_SERVER)
    #[arg(short, long)]
    server: Option<String>,

    /// Current item level
    #[arg(short, long, value_name = "LEVEL")]
    item_level: Option<u32>,
}

impl Add {
    pub fn execute(self, config: &RosterConfig) -> Result<()> {
        let service = open_service(config)?;
        let server = self.server.as_deref().unwrap_or(&config.server);

        let character = service
            .add_character(&self.name, server)
            .with_context(|| format!("Failed to add {}", self.name))?;
        if let Some(level) = self.item_level {
            service.record_item_level(&character.name, level, chrono::Utc::now())?;
        }

        println!(
            "{} {} ({})",
            style("Added").bold().green(),
            character.name,
            character.server
        );
        Ok(())
    }
}
