//! Roster records as stored on disk.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of the latest scoring attempt for a character.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreStatus {
    /// Never scored.
    #[default]
    Pending,
    /// `combat_score` holds the result of the latest feed.
    Scored,
    /// The latest record was rejected; the score was not computed.
    Rejected { reason: String },
}

impl ScoreStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Scored => "scored",
            Self::Rejected { .. } => "score not computed",
        }
    }
}

/// One point in a character's progression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub item_level: Option<u32>,
    pub combat_score: Option<u64>,
    pub recorded_at: DateTime<Utc>,
}

/// How much history each character keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryRetention {
    /// Newest entries kept. At least 1.
    pub max_entries: usize,
    /// Entries older than this, measured from the latest update, are dropped.
    pub max_age: Option<TimeDelta>,
}

impl HistoryRetention {
    pub fn entries(max_entries: usize) -> Self {
        Self {
            max_entries: max_entries.max(1),
            max_age: None,
        }
    }

    pub fn with_max_age(mut self, max_age: TimeDelta) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Drop entries outside the window. `history` is oldest first.
    fn apply(&self, history: &mut Vec<HistoryEntry>, now: DateTime<Utc>) {
        if let Some(cutoff) = self.max_age.and_then(|age| now.checked_sub_signed(age)) {
            history.retain(|entry| entry.recorded_at >= cutoff);
        }
        if history.len() > self.max_entries {
            let excess = history.len() - self.max_entries;
            history.drain(..excess);
        }
    }
}

/// A tracked character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub server: String,
    #[serde(default)]
    pub item_level: Option<u32>,
    #[serde(default)]
    pub combat_score: Option<u64>,
    #[serde(default)]
    pub status: ScoreStatus,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// Oldest first, bounded by the configured [`HistoryRetention`].
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Character {
    pub fn new(name: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            server: server.into(),
            item_level: None,
            combat_score: None,
            status: ScoreStatus::Pending,
            last_updated: None,
            history: Vec::new(),
        }
    }

    /// Store new values, appending a history entry when either changed.
    ///
    /// `None` leaves the current value untouched. Returns whether an entry
    /// was appended. Retention is applied on every call, so aged entries
    /// drop out even when nothing changed.
    pub fn record(
        &mut self,
        item_level: Option<u32>,
        combat_score: Option<u64>,
        at: DateTime<Utc>,
        retention: &HistoryRetention,
    ) -> bool {
        let item_level = item_level.or(self.item_level);
        let combat_score = combat_score.or(self.combat_score);
        self.last_updated = Some(at);

        let changed = item_level != self.item_level || combat_score != self.combat_score;
        if changed {
            self.item_level = item_level;
            self.combat_score = combat_score;
            self.history.push(HistoryEntry {
                item_level,
                combat_score,
                recorded_at: at,
            });
        }
        retention.apply(&mut self.history, at);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    const KEEP_30: HistoryRetention = HistoryRetention {
        max_entries: 30,
        max_age: None,
    };

    #[test]
    fn unchanged_values_do_not_grow_history() {
        let mut character = Character::new("Lumiel", "Siel");
        assert!(character.record(Some(2100), None, at(1), &KEEP_30));
        assert!(!character.record(Some(2100), None, at(2), &KEEP_30));
        assert_eq!(character.history.len(), 1);
        assert_eq!(character.last_updated, Some(at(2)));
    }

    #[test]
    fn history_keeps_newest_entries() {
        let mut character = Character::new("Lumiel", "Siel");
        for day in 1..=5 {
            character.record(
                Some(2000 + day),
                Some(u64::from(day) * 10),
                at(day),
                &HistoryRetention::entries(3),
            );
        }
        let levels: Vec<Option<u32>> = character.history.iter().map(|h| h.item_level).collect();
        assert_eq!(levels, [Some(2003), Some(2004), Some(2005)]);
    }

    #[test]
    fn aged_entries_drop_out() {
        let retention = HistoryRetention::entries(30).with_max_age(TimeDelta::days(7));
        let mut character = Character::new("Lumiel", "Siel");
        character.record(Some(2000), None, at(1), &retention);
        character.record(Some(2010), None, at(5), &retention);

        // Unchanged, but the day-1 entry is now older than a week.
        assert!(!character.record(Some(2010), None, at(10), &retention));
        let levels: Vec<Option<u32>> = character.history.iter().map(|h| h.item_level).collect();
        assert_eq!(levels, [Some(2010)]);
        assert_eq!(character.item_level, Some(2010));
    }

    #[test]
    fn score_update_keeps_item_level() {
        let mut character = Character::new("Lumiel", "Siel");
        character.record(Some(2100), None, at(1), &KEEP_30);
        character.record(None, Some(8000), at(2), &KEEP_30);
        assert_eq!(character.item_level, Some(2100));
        assert_eq!(character.history[1].item_level, Some(2100));
        assert_eq!(character.history[1].combat_score, Some(8000));
    }

    #[test]
    fn status_serializes_with_tag() {
        let status = ScoreStatus::Rejected {
            reason: "missing field `power_stat`".into(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(status.label(), "score not computed");
    }
}
