//! CharacterStatSnapshot - everything the engine reads about one character.
//!
//! A snapshot is produced once per character per update cycle by the stat
//! feed and is never mutated by the engine. Sources the character does not
//! have are present as 0.
//!
//! Integer sources use unsigned types, so negativity is impossible once a
//! snapshot exists. Percentage sources are plain percent numbers (20 = 20%)
//! and are checked by [`CharacterStatSnapshot::validate`] before scoring.

mod fields;
mod skills;

pub use fields::{FieldKind, StatField};
pub use skills::{ActiveSkills, PassiveSkills, SkillLevel, SkillSet, StigmaSkill};

use crate::class::ClassArchetype;
use crate::error::{NumericFault, ValidationError};

/// Flat and percentage attack inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackSources {
    /// Flat attack summed over the four deva boards.
    pub deva: u32,
    /// Equipment and accessory base attack including enhancement.
    pub equipment: u32,
    /// Breakthrough tier: +30 flat and +1% per level.
    pub breakthrough_level: u32,
    /// Destruction stat points (+0.2% each).
    pub destruction: u32,
    /// Power stat points (+0.1% each).
    pub power: u32,
    /// PvE/boss attack from ariel, added after the percent multiplier.
    pub pve: u32,
    /// Level of the class attack passive.
    pub passive_level: u32,
}

/// Per-source inputs for one damage amplification type.
///
/// Which sources may feed which type is fixed by
/// [`crate::stats::damage_amp::ELIGIBILITY`]; ineligible entries are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmpSources {
    pub soul_engraving: f64,
    pub equipment_base: f64,
    /// Integer rating from socketed mana stones.
    pub mana_stone: u32,
    pub deva: f64,
    pub ariel: f64,
    pub title: f64,
}

/// Damage amplification inputs for the four tracked types.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageAmpSources {
    pub weapon: AmpSources,
    pub pve: AmpSources,
    pub normal: AmpSources,
    pub critical: AmpSources,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSpeedSources {
    pub soul_engraving: f64,
    pub accessory_base: f64,
    /// Time stat points (+0.2% each).
    pub time: u32,
    pub deva: f64,
    pub title: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooldownSources {
    pub title: f64,
    /// Illusion stat points (+0.2% each).
    pub illusion: u32,
    pub deva: f64,
}

/// Critical rating inputs. All rating sources are integers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalSources {
    /// Weapon and guard base option.
    pub base: u32,
    pub soul_engraving: u32,
    pub mana_stone: u32,
    pub deva: u32,
    /// Death stat points (+0.2% rating each).
    pub death: u32,
    /// Accuracy stat points (+0.1% rating each).
    pub accuracy: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeSources {
    pub title: f64,
    /// Wisdom stat points (+0.2% each).
    pub wisdom: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerfectSources {
    pub title: f64,
    /// Justice stat points (+0.2% each).
    pub justice: u32,
    pub accessory_base: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiHitSources {
    pub soul_engraving: f64,
    pub mana_stone: f64,
    pub deva: f64,
}

/// Weapon damage roll bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponRange {
    pub min: u32,
    pub max: u32,
}

/// Complete stat snapshot of one character.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStatSnapshot {
    pub class: ClassArchetype,
    pub attack: AttackSources,
    pub damage_amp: DamageAmpSources,
    pub skills: SkillSet,
    pub combat_speed: CombatSpeedSources,
    pub cooldown: CooldownSources,
    pub critical: CriticalSources,
    pub strike: StrikeSources,
    pub perfect: PerfectSources,
    pub multi_hit: MultiHitSources,
    pub weapon: WeaponRange,
}

impl CharacterStatSnapshot {
    /// An all-zero snapshot for the given class.
    pub fn new(class: ClassArchetype) -> Self {
        Self {
            class,
            ..Self::default()
        }
    }

    /// Check every value the formulas rely on.
    ///
    /// Runs before any arithmetic. Percentages must be finite and not below
    /// -100; the weapon range must not be inverted; stigma average levels must
    /// be finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in StatField::percent_fields() {
            check_percent(field.name(), field.value(self))?;
        }

        // Ineligible amp cells are never read, but a NaN anywhere in the
        // snapshot still means the feed is broken.
        for (name, sources) in [
            ("damage_amp.weapon", &self.damage_amp.weapon),
            ("damage_amp.pve", &self.damage_amp.pve),
            ("damage_amp.normal", &self.damage_amp.normal),
            ("damage_amp.critical", &self.damage_amp.critical),
        ] {
            for value in [
                sources.soul_engraving,
                sources.equipment_base,
                sources.deva,
                sources.ariel,
                sources.title,
            ] {
                if !value.is_finite() {
                    return Err(ValidationError::invalid(name, NumericFault::NotFinite));
                }
            }
        }

        if self.weapon.min > self.weapon.max {
            return Err(ValidationError::InvertedWeaponRange {
                min: self.weapon.min,
                max: self.weapon.max,
            });
        }

        self.skills.validate()
    }
}

fn check_percent(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid(field, NumericFault::NotFinite));
    }
    if value < -100.0 {
        return Err(ValidationError::invalid(
            field,
            NumericFault::BelowMinusHundred,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_valid() {
        assert_eq!(CharacterStatSnapshot::default().validate(), Ok(()));
    }

    #[test]
    fn nan_percentage_is_rejected_by_name() {
        let mut snapshot = CharacterStatSnapshot::default();
        snapshot.cooldown.title = f64::NAN;
        assert_eq!(
            snapshot.validate(),
            Err(ValidationError::invalid(
                "cooldown_title",
                NumericFault::NotFinite
            ))
        );
    }

    #[test]
    fn percentage_below_minus_hundred_is_rejected() {
        let mut snapshot = CharacterStatSnapshot::default();
        snapshot.combat_speed.deva = -100.5;
        assert_eq!(
            snapshot.validate(),
            Err(ValidationError::invalid(
                "combat_speed_deva",
                NumericFault::BelowMinusHundred
            ))
        );

        snapshot.combat_speed.deva = -100.0;
        assert_eq!(snapshot.validate(), Ok(()));
    }

    #[test]
    fn infinite_ineligible_cell_is_still_rejected() {
        let mut snapshot = CharacterStatSnapshot::default();
        snapshot.damage_amp.weapon.ariel = f64::INFINITY;
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn inverted_weapon_range_is_rejected() {
        let mut snapshot = CharacterStatSnapshot::default();
        snapshot.weapon = WeaponRange { min: 900, max: 600 };
        assert_eq!(
            snapshot.validate(),
            Err(ValidationError::InvertedWeaponRange { min: 900, max: 600 })
        );
    }
}
