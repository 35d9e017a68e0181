//! Repository contract for the roster document.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Character;

/// The persisted roster: `{"characters": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub characters: Vec<Character>,
}

impl Roster {
    pub fn get(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.name == name)
    }

    /// Replace the character with the same name, or append it.
    pub fn upsert(&mut self, character: Character) {
        match self.get_mut(&character.name) {
            Some(existing) => *existing = character,
            None => self.characters.push(character),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Character> {
        let index = self.characters.iter().position(|c| c.name == name)?;
        Some(self.characters.remove(index))
    }
}

/// Storage for the roster document.
///
/// Implementors provide `load` and `save`; the per-character operations are
/// a read-modify-write of the whole document.
pub trait RosterRepository: Send + Sync {
    /// Load the roster. A store that was never written yields an empty roster.
    fn load(&self) -> Result<Roster>;

    /// Replace the stored roster.
    fn save(&self, roster: &Roster) -> Result<()>;

    fn get(&self, name: &str) -> Result<Option<Character>> {
        Ok(self.load()?.get(name).cloned())
    }

    fn upsert(&self, character: Character) -> Result<()> {
        let mut roster = self.load()?;
        roster.upsert(character);
        self.save(&roster)
    }

    fn remove(&self, name: &str) -> Result<Option<Character>> {
        let mut roster = self.load()?;
        let removed = roster.remove(name);
        if removed.is_some() {
            self.save(&roster)?;
        }
        Ok(removed)
    }

    /// All characters in stored order.
    fn list(&self) -> Result<Vec<Character>> {
        Ok(self.load()?.characters)
    }
}
