//! FileRosterRepository against a real directory.

use chrono::{TimeZone, Utc};
use roster::{
    Character, FileRosterRepository, HistoryRetention, Roster, RosterRepository, ScoreStatus,
};

#[test]
fn missing_file_loads_as_empty_roster() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRosterRepository::new(dir.path().join("characters.json"));
    assert_eq!(repo.load().unwrap(), Roster::default());
}

#[test]
fn roster_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("characters.json");
    let repo = FileRosterRepository::new(&path);

    let mut character = Character::new("Lumiel", "Siel");
    character.record(
        Some(2150),
        Some(48_200),
        Utc.with_ymd_and_hms(2026, 5, 1, 9, 30, 0).unwrap(),
        &HistoryRetention::entries(30),
    );
    character.status = ScoreStatus::Rejected {
        reason: "missing field `power_stat`".into(),
    };
    repo.upsert(character.clone()).unwrap();
    repo.upsert(Character::new("Ariel", "Siel")).unwrap();

    // A fresh handle reads what the first one wrote.
    let reopened = FileRosterRepository::new(&path);
    let list = reopened.list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], character);
    assert!(!path.with_extension("json.tmp").exists());

    let json = std::fs::read_to_string(&path).unwrap();
    let document: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(document["characters"].is_array());
}

#[test]
fn remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRosterRepository::new(dir.path().join("characters.json"));
    repo.upsert(Character::new("Lumiel", "Siel")).unwrap();

    assert!(repo.remove("Lumiel").unwrap().is_some());
    assert!(repo.get("Lumiel").unwrap().is_none());
}

#[test]
fn corrupt_file_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("characters.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = FileRosterRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, roster::RosterError::Json(_)));
}
