//! Roster service: the operations the CLI exposes, over any repository.

use chrono::{DateTime, Utc};
use serde::Serialize;

use score_core::{ScoreEngine, ScoreReport, ValidationError};

use crate::error::{Result, RosterError};
use crate::feed::{Feed, decode_item_level, decode_snapshot};
use crate::model::{Character, HistoryRetention, ScoreStatus};
use crate::repository::RosterRepository;

/// Outcome of one rescore run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RescoreSummary {
    /// Characters whose score was computed.
    pub scored: Vec<String>,
    /// Characters whose record was rejected, with the reason.
    pub rejected: Vec<(String, String)>,
    /// Characters with no record in the feed.
    pub missing: Vec<String>,
}

impl RescoreSummary {
    pub fn total(&self) -> usize {
        self.scored.len() + self.rejected.len() + self.missing.len()
    }
}

pub struct RosterService<R> {
    repo: R,
    engine: ScoreEngine,
    retention: HistoryRetention,
}

impl<R: RosterRepository> RosterService<R> {
    pub fn new(repo: R, engine: ScoreEngine, retention: HistoryRetention) -> Self {
        Self {
            repo,
            engine,
            retention,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn add_character(&self, name: &str, server: &str) -> Result<Character> {
        let name = name.trim();
        let mut roster = self.repo.load()?;
        if roster.get(name).is_some() {
            return Err(RosterError::DuplicateCharacter(name.to_string()));
        }

        let character = Character::new(name, server);
        roster.upsert(character.clone());
        self.repo.save(&roster)?;

        tracing::info!("Added character {} ({})", name, server);
        Ok(character)
    }

    pub fn remove_character(&self, name: &str) -> Result<Character> {
        let removed = self
            .repo
            .remove(name)?
            .ok_or_else(|| RosterError::CharacterNotFound(name.to_string()))?;

        tracing::info!("Removed character {}", name);
        Ok(removed)
    }

    pub fn character(&self, name: &str) -> Result<Character> {
        self.repo
            .get(name)?
            .ok_or_else(|| RosterError::CharacterNotFound(name.to_string()))
    }

    pub fn list(&self) -> Result<Vec<Character>> {
        self.repo.list()
    }

    /// Store a new item level. Returns whether history grew.
    pub fn record_item_level(
        &self,
        name: &str,
        item_level: u32,
        at: DateTime<Utc>,
    ) -> Result<bool> {
        let mut character = self.character(name)?;
        let changed = character.record(Some(item_level), None, at, &self.retention);
        self.repo.upsert(character)?;
        Ok(changed)
    }

    /// Score every roster character that has a record in `feed`.
    pub fn rescore(&self, feed: &Feed) -> Result<RescoreSummary> {
        self.rescore_at(feed, Utc::now())
    }

    /// [`Self::rescore`] with an explicit timestamp.
    ///
    /// A rejected record marks that character rejected and the run goes on.
    /// The roster is saved once at the end.
    pub fn rescore_at(&self, feed: &Feed, at: DateTime<Utc>) -> Result<RescoreSummary> {
        let mut roster = self.repo.load()?;
        let mut summary = RescoreSummary::default();

        for character in &mut roster.characters {
            let Some(record) = feed.get(&character.name) else {
                tracing::debug!("No feed record for {}", character.name);
                summary.missing.push(character.name.clone());
                continue;
            };

            match self.score_record(record) {
                Ok((item_level, report)) => {
                    let score = Some(report.combat_score());
                    character.record(item_level, score, at, &self.retention);
                    character.status = ScoreStatus::Scored;
                    tracing::debug!(
                        "Scored {}: attack {} × {:.4} = {}",
                        character.name,
                        report.result.final_attack,
                        report.result.total_multiplier,
                        report.result.combat_score
                    );
                    summary.scored.push(character.name.clone());
                }
                Err(err) => {
                    tracing::warn!("Score not computed for {}: {}", character.name, err);
                    character.status = ScoreStatus::Rejected {
                        reason: err.to_string(),
                    };
                    summary.rejected.push((character.name.clone(), err.to_string()));
                }
            }
        }

        for name in feed.names() {
            if roster.get(name).is_none() {
                tracing::debug!("Ignoring feed record for untracked character {}", name);
            }
        }

        self.repo.save(&roster)?;
        tracing::info!(
            "Rescore finished: {} scored, {} rejected, {} missing",
            summary.scored.len(),
            summary.rejected.len(),
            summary.missing.len()
        );
        Ok(summary)
    }

    fn score_record(
        &self,
        record: &serde_json::Value,
    ) -> std::result::Result<(Option<u32>, ScoreReport), ValidationError> {
        let item_level = decode_item_level(record)?;
        let snapshot = decode_snapshot(record)?;
        let report = self.engine.compute(&snapshot)?;
        Ok((item_level, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRosterRepository;

    fn service() -> RosterService<InMemoryRosterRepository> {
        RosterService::new(
            InMemoryRosterRepository::new(),
            ScoreEngine::default(),
            HistoryRetention::entries(30),
        )
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let service = service();
        service.add_character("Lumiel", "Siel").unwrap();
        assert!(matches!(
            service.add_character("Lumiel", "Siel"),
            Err(RosterError::DuplicateCharacter(name)) if name == "Lumiel"
        ));
    }

    #[test]
    fn removing_unknown_character_fails() {
        let service = service();
        assert!(matches!(
            service.remove_character("Nobody"),
            Err(RosterError::CharacterNotFound(_))
        ));
    }

    #[test]
    fn item_level_changes_are_recorded_once() {
        let service = service();
        service.add_character("Lumiel", "Siel").unwrap();
        let now = Utc::now();
        assert!(service.record_item_level("Lumiel", 2100, now).unwrap());
        assert!(!service.record_item_level("Lumiel", 2100, now).unwrap());
        assert_eq!(service.character("Lumiel").unwrap().history.len(), 1);
    }
}
