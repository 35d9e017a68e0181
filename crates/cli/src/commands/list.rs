//! List tracked characters.

use anyhow::Result;
use clap::Parser;
use console::style;
use roster::{Character, RosterConfig};

use super::{open_service, or_dash};

#[derive(Parser)]
pub struct List {
    /// Sort order
    #[arg(short, long, value_enum, default_value = "score")]
    sort: SortKey,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SortKey {
    /// Highest combat score first
    Score,
    /// Highest item level first
    ItemLevel,
    /// Alphabetical
    Name,
}

impl List {
    pub fn execute(self, config: &RosterConfig) -> Result<()> {
        let service = open_service(config)?;
        let mut characters = service.list()?;

        if characters.is_empty() {
            println!("{}", style("No characters tracked").dim());
            return Ok(());
        }

        sort(&mut characters, self.sort);

        println!(
            "{}",
            style(format!(
                "{:<20} {:<12} {:>10} {:>12}  {}",
                "NAME", "SERVER", "ITEM LVL", "SCORE", "STATUS"
            ))
            .bold()
            .cyan()
        );
        for character in &characters {
            println!(
                "{:<20} {:<12} {:>10} {:>12}  {}",
                character.name,
                character.server,
                or_dash(character.item_level),
                or_dash(character.combat_score),
                character.status.label()
            );
        }
        println!();
        println!("Total: {} characters", characters.len());
        Ok(())
    }
}

fn sort(characters: &mut [Character], key: SortKey) {
    match key {
        SortKey::Score => characters.sort_by(|a, b| {
            b.combat_score
                .cmp(&a.combat_score)
                .then_with(|| a.name.cmp(&b.name))
        }),
        SortKey::ItemLevel => characters.sort_by(|a, b| {
            b.item_level
                .cmp(&a.item_level)
                .then_with(|| a.name.cmp(&b.name))
        }),
        SortKey::Name => characters.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(name: &str, score: Option<u64>) -> Character {
        let mut character = Character::new(name, "Siel");
        character.combat_score = score;
        character
    }

    #[test]
    fn unscored_characters_sort_last() {
        let mut characters = vec![
            character("Ariel", None),
            character("Lumiel", Some(6000)),
            character("Kaisinel", Some(9000)),
        ];
        sort(&mut characters, SortKey::Score);
        let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Kaisinel", "Lumiel", "Ariel"]);
    }
}
