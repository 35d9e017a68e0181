//! File-based RosterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::repository::{Roster, RosterRepository};

/// Roster stored as one pretty-printed JSON document.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash never leaves a half-written roster behind.
pub struct FileRosterRepository {
    path: PathBuf,
}

impl FileRosterRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterRepository for FileRosterRepository {
    fn load(&self) -> Result<Roster> {
        if !self.path.exists() {
            return Ok(Roster::default());
        }

        let json = fs::read_to_string(&self.path)?;
        let roster: Roster = serde_json::from_str(&json)?;

        tracing::debug!(
            "Loaded roster {} with {} characters",
            self.path.display(),
            roster.characters.len()
        );

        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(roster)?;
        fs::write(&temp_path, json)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved roster: {}", self.path.display());

        Ok(())
    }
}
