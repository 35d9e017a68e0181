//! Stop tracking a character.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roster::RosterConfig;

use super::open_service;

#[derive(Parser)]
pub struct Remove {
    /// Character name
    #[arg(value_name = "NAME")]
    name: String,
}

impl Remove {
    pub fn execute(self, config: &RosterConfig) -> Result<()> {
        let service = open_service(config)?;
        let removed = service
            .remove_character(&self.name)
            .with_context(|| format!("Failed to remove {}", self.name))?;

        println!("{} {}", style("Removed").bold().yellow(), removed.name);
        Ok(())
    }
}
