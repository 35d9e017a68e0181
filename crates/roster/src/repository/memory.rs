//! In-memory RosterRepository implementation for tests and dry runs.

use std::sync::RwLock;

use crate::error::{Result, RosterError};
use crate::model::Character;
use crate::repository::{Roster, RosterRepository};

pub struct InMemoryRosterRepository {
    roster: RwLock<Roster>,
}

impl InMemoryRosterRepository {
    pub fn new() -> Self {
        Self::with_roster(Roster::default())
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster: RwLock::new(roster),
        }
    }
}

impl Default for InMemoryRosterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterRepository for InMemoryRosterRepository {
    fn load(&self) -> Result<Roster> {
        let roster = self
            .roster
            .read()
            .map_err(|_| RosterError::LockPoisoned)?;
        Ok(roster.clone())
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        let mut stored = self
            .roster
            .write()
            .map_err(|_| RosterError::LockPoisoned)?;
        *stored = roster.clone();
        Ok(())
    }

    fn upsert(&self, character: Character) -> Result<()> {
        let mut stored = self
            .roster
            .write()
            .map_err(|_| RosterError::LockPoisoned)?;
        stored.upsert(character);
        Ok(())
    }
}
