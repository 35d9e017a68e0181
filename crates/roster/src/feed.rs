//! Stat feed decoding.
//!
//! The scraper delivers one flat JSON object per character. Every scalar
//! named by [`StatField`] must be present; unsourced stats are sent as 0.
//! Skill lists are arrays of `{ "name", "level" [, "avg_level"] }` and may be
//! omitted when empty.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use strum::IntoEnumIterator;

use score_core::{
    CharacterStatSnapshot, ClassArchetype, NumericFault, SkillLevel, SkillSet, StatField,
    StigmaSkill, ValidationError,
};

use crate::error::Result;

/// Record key of the class archetype.
pub const CLASS_KEY: &str = "class";
/// Optional record key of the item level.
pub const ITEM_LEVEL_KEY: &str = "item_level";

type Decoded<T> = std::result::Result<T, ValidationError>;

/// Keys and error labels of one skill category.
struct SkillKeys {
    list: &'static str,
    name: &'static str,
    level: &'static str,
}

const ACTIVE: SkillKeys = SkillKeys {
    list: "active_skills",
    name: "active_skills.name",
    level: "active_skills.level",
};
const PASSIVE: SkillKeys = SkillKeys {
    list: "passive_skills",
    name: "passive_skills.name",
    level: "passive_skills.level",
};
const STIGMA_AVG_LEVEL: &str = "stigma_skills.avg_level";
const STIGMA: SkillKeys = SkillKeys {
    list: "stigma_skills",
    name: "stigma_skills.name",
    level: "stigma_skills.level",
};

/// Decode one feed record into a snapshot.
///
/// Fails on the first missing or malformed field; no partial snapshot is
/// returned.
pub fn decode_snapshot(record: &Value) -> Decoded<CharacterStatSnapshot> {
    let object = record
        .as_object()
        .ok_or(ValidationError::MissingField { field: CLASS_KEY })?;

    let mut snapshot = CharacterStatSnapshot::new(decode_class(object)?);
    for field in StatField::iter() {
        let value = number(object.get(field.name()), field.name())?;
        field.set(&mut snapshot, value)?;
    }

    snapshot.skills = SkillSet::from_lists(
        skill_levels(object, &ACTIVE)?,
        skill_levels(object, &PASSIVE)?,
        stigma_skills(object)?,
    )?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Item level carried by a record, if any.
pub fn decode_item_level(record: &Value) -> Decoded<Option<u32>> {
    match record.get(ITEM_LEVEL_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => whole(Some(value), ITEM_LEVEL_KEY).map(Some),
    }
}

/// A feed: character name → raw stat record.
///
/// Records stay raw so that one malformed record never prevents decoding
/// the others.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feed {
    records: BTreeMap<String, Value>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, record: Value) {
        self.records.insert(name.into(), record);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.records.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse a feed document: a JSON object mapping names to records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: BTreeMap<String, Value> = serde_json::from_str(json)?;
        Ok(Self { records })
    }
}

/// Read a feed document from disk.
pub fn load_feed(path: impl AsRef<Path>) -> Result<Feed> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let feed = Feed::from_json_str(&json)?;
    tracing::debug!("Loaded feed {} with {} records", path.display(), feed.len());
    Ok(feed)
}

fn decode_class(object: &Map<String, Value>) -> Decoded<ClassArchetype> {
    let name = object
        .get(CLASS_KEY)
        .and_then(Value::as_str)
        .ok_or(ValidationError::MissingField { field: CLASS_KEY })?;
    name.parse().map_err(|_| ValidationError::UnknownClass {
        name: name.to_string(),
    })
}

fn number(value: Option<&Value>, field: &'static str) -> Decoded<f64> {
    match value {
        None => Err(ValidationError::MissingField { field }),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or(ValidationError::invalid(field, NumericFault::OutOfRange)),
        Some(_) => Err(ValidationError::invalid(field, NumericFault::NotANumber)),
    }
}

fn whole(value: Option<&Value>, field: &'static str) -> Decoded<u32> {
    let value = number(value, field)?;
    if value < 0.0 {
        return Err(ValidationError::invalid(field, NumericFault::Negative));
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::invalid(field, NumericFault::NotInteger));
    }
    if value > f64::from(u32::MAX) {
        return Err(ValidationError::invalid(field, NumericFault::OutOfRange));
    }
    Ok(value as u32)
}

fn entries<'a>(
    object: &'a Map<String, Value>,
    keys: &SkillKeys,
) -> Decoded<Vec<&'a Map<String, Value>>> {
    match object.get(keys.list) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_object()
                    .ok_or(ValidationError::MissingField { field: keys.name })
            })
            .collect(),
        Some(_) => Err(ValidationError::MissingField { field: keys.list }),
    }
}

fn skill_name(entry: &Map<String, Value>, keys: &SkillKeys) -> Decoded<String> {
    entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ValidationError::MissingField { field: keys.name })
}

fn skill_levels(object: &Map<String, Value>, keys: &SkillKeys) -> Decoded<Vec<SkillLevel>> {
    entries(object, keys)?
        .into_iter()
        .map(|entry| -> Decoded<SkillLevel> {
            Ok(SkillLevel {
                name: skill_name(entry, keys)?,
                level: whole(entry.get("level"), keys.level)?,
            })
        })
        .collect()
}

fn stigma_skills(object: &Map<String, Value>) -> Decoded<Vec<StigmaSkill>> {
    entries(object, &STIGMA)?
        .into_iter()
        .map(|entry| -> Decoded<StigmaSkill> {
            let avg_level = match entry.get("avg_level") {
                None | Some(Value::Null) => 0.0,
                value => number(value, STIGMA_AVG_LEVEL)?,
            };
            Ok(StigmaSkill {
                name: skill_name(entry, &STIGMA)?,
                level: whole(entry.get("level"), STIGMA.level)?,
                avg_level,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn zero_record() -> Value {
        let mut object = Map::new();
        object.insert(CLASS_KEY.into(), json!("ranger"));
        for field in StatField::iter() {
            object.insert(field.name().into(), json!(0));
        }
        Value::Object(object)
    }

    #[test]
    fn decodes_every_field() {
        let mut record = zero_record();
        record["power_stat"] = json!(120);
        record["weapon_amp_title"] = json!(2.5);
        record["weapon_max_damage"] = json!(900);
        record["active_skills"] = json!([{ "name": "arrow", "level": 14 }]);
        record["stigma_skills"] = json!([{ "name": "veil", "level": 10, "avg_level": 8.5 }]);

        let snapshot = decode_snapshot(&record).unwrap();
        assert_eq!(snapshot.class, ClassArchetype::Ranger);
        assert_eq!(snapshot.attack.power, 120);
        assert_eq!(snapshot.damage_amp.weapon.title, 2.5);
        assert_eq!(snapshot.weapon.max, 900);
        assert_eq!(snapshot.skills.active[0], SkillLevel::new("arrow", 14));
        assert_eq!(snapshot.skills.stigma[0].avg_level, 8.5);
    }

    #[test]
    fn missing_field_is_named() {
        let mut record = zero_record();
        record.as_object_mut().unwrap().remove("death_stat");
        assert_eq!(
            decode_snapshot(&record),
            Err(ValidationError::MissingField {
                field: "death_stat"
            })
        );
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let mut record = zero_record();
        record["time_stat"] = json!("fast");
        assert_eq!(
            decode_snapshot(&record),
            Err(ValidationError::invalid("time_stat", NumericFault::NotANumber))
        );
    }

    #[test]
    fn integer_fields_reject_negative_and_fractional() {
        let mut record = zero_record();
        record["justice_stat"] = json!(-4);
        assert_eq!(
            decode_snapshot(&record),
            Err(ValidationError::invalid("justice_stat", NumericFault::Negative))
        );

        let mut record = zero_record();
        record["attack_deva"] = json!(10.5);
        assert_eq!(
            decode_snapshot(&record),
            Err(ValidationError::invalid("attack_deva", NumericFault::NotInteger))
        );
    }

    #[test]
    fn unknown_class_is_rejected() {
        let mut record = zero_record();
        record[CLASS_KEY] = json!("bard");
        assert_eq!(
            decode_snapshot(&record),
            Err(ValidationError::UnknownClass {
                name: "bard".into()
            })
        );
    }

    #[test]
    fn malformed_skill_entry_is_rejected() {
        let mut record = zero_record();
        record["passive_skills"] = json!([{ "level": 3 }]);
        assert_eq!(
            decode_snapshot(&record),
            Err(ValidationError::MissingField {
                field: "passive_skills.name"
            })
        );
    }

    #[test]
    fn item_level_is_optional() {
        let mut record = zero_record();
        assert_eq!(decode_item_level(&record), Ok(None));
        record[ITEM_LEVEL_KEY] = json!(2150);
        assert_eq!(decode_item_level(&record), Ok(Some(2150)));
    }

    #[test]
    fn snapshot_deserialization_requires_every_section() {
        assert!(serde_json::from_str::<CharacterStatSnapshot>("{}").is_err());

        let full = serde_json::to_value(CharacterStatSnapshot::default()).unwrap();
        let decoded: CharacterStatSnapshot = serde_json::from_value(full.clone()).unwrap();
        assert_eq!(decoded, CharacterStatSnapshot::default());

        let mut partial = full;
        partial.as_object_mut().unwrap().remove("critical");
        assert!(serde_json::from_value::<CharacterStatSnapshot>(partial).is_err());
    }

    #[test]
    fn feed_document_keeps_raw_records() {
        let feed = Feed::from_json_str(r#"{ "Lumiel": { "class": "cleric" }, "Siel": 3 }"#).unwrap();
        assert_eq!(feed.len(), 2);
        assert!(decode_snapshot(feed.get("Lumiel").unwrap()).is_err());
        assert_eq!(feed.names().collect::<Vec<_>>(), ["Lumiel", "Siel"]);
    }
}
