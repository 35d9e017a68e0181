//! Flat field registry over [`CharacterStatSnapshot`].
//!
//! The stat feed delivers one flat record per character. [`StatField`] names
//! every scalar in the snapshot so records can be decoded field by field and
//! so validation can walk all percentages without hand-listing them.

use strum::IntoEnumIterator;

use super::CharacterStatSnapshot;
use crate::error::{NumericFault, ValidationError};

/// Storage class of a scalar field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Non-negative whole number (ratings, stat points, levels).
    Integer,
    /// Plain percent number; may be negative but not below -100.
    Percent,
}

enum Slot<'a> {
    Integer(&'a mut u32),
    Percent(&'a mut f64),
}

macro_rules! stat_fields {
    ($( $variant:ident => $kind:ident, $($path:ident).+ ; )*) => {
        /// Every scalar field of a snapshot, in feed order.
        ///
        /// The snake_case name of each variant is its key in a feed record.
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            strum::Display,
            strum::EnumString,
            strum::IntoStaticStr,
            strum::EnumIter,
            strum::EnumCount,
        )]
        #[strum(serialize_all = "snake_case")]
        pub enum StatField {
            $( $variant, )*
        }

        impl StatField {
            pub const fn kind(self) -> FieldKind {
                match self {
                    $( Self::$variant => FieldKind::$kind, )*
                }
            }

            /// Current value of this field in `snapshot`, widened to f64.
            pub fn value(self, snapshot: &CharacterStatSnapshot) -> f64 {
                match self {
                    $( Self::$variant => stat_fields!(@read $kind, snapshot.$($path).+), )*
                }
            }

            fn slot(self, snapshot: &mut CharacterStatSnapshot) -> Slot<'_> {
                match self {
                    $( Self::$variant => stat_fields!(@slot $kind, snapshot.$($path).+), )*
                }
            }
        }
    };
    (@read Integer, $place:expr) => { f64::from($place) };
    (@read Percent, $place:expr) => { $place };
    (@slot Integer, $place:expr) => { Slot::Integer(&mut $place) };
    (@slot Percent, $place:expr) => { Slot::Percent(&mut $place) };
}

stat_fields! {
    AttackDeva => Integer, attack.deva;
    AttackEquipment => Integer, attack.equipment;
    BreakthroughLevel => Integer, attack.breakthrough_level;
    DestructionStat => Integer, attack.destruction;
    PowerStat => Integer, attack.power;
    PveAttack => Integer, attack.pve;
    PassiveSkillLevel => Integer, attack.passive_level;

    WeaponAmpSoulEngraving => Percent, damage_amp.weapon.soul_engraving;
    WeaponAmpEquipmentBase => Percent, damage_amp.weapon.equipment_base;
    WeaponAmpManaStone => Integer, damage_amp.weapon.mana_stone;
    WeaponAmpDeva => Percent, damage_amp.weapon.deva;
    WeaponAmpTitle => Percent, damage_amp.weapon.title;

    PveAmpSoulEngraving => Percent, damage_amp.pve.soul_engraving;
    PveAmpEquipmentBase => Percent, damage_amp.pve.equipment_base;
    PveAmpManaStone => Integer, damage_amp.pve.mana_stone;
    PveAmpDeva => Percent, damage_amp.pve.deva;
    PveAmpAriel => Percent, damage_amp.pve.ariel;
    PveAmpTitle => Percent, damage_amp.pve.title;

    NormalAmpSoulEngraving => Percent, damage_amp.normal.soul_engraving;
    NormalAmpManaStone => Integer, damage_amp.normal.mana_stone;
    NormalAmpDeva => Percent, damage_amp.normal.deva;
    NormalAmpTitle => Percent, damage_amp.normal.title;

    CriticalAmpSoulEngraving => Percent, damage_amp.critical.soul_engraving;
    CriticalAmpManaStone => Integer, damage_amp.critical.mana_stone;
    CriticalAmpDeva => Percent, damage_amp.critical.deva;

    CombatSpeedSoulEngraving => Percent, combat_speed.soul_engraving;
    CombatSpeedAccessoryBase => Percent, combat_speed.accessory_base;
    TimeStat => Integer, combat_speed.time;
    CombatSpeedDeva => Percent, combat_speed.deva;
    CombatSpeedTitle => Percent, combat_speed.title;

    CooldownTitle => Percent, cooldown.title;
    IllusionStat => Integer, cooldown.illusion;
    CooldownDeva => Percent, cooldown.deva;

    CriticalBase => Integer, critical.base;
    CriticalSoulEngraving => Integer, critical.soul_engraving;
    CriticalManaStone => Integer, critical.mana_stone;
    CriticalDeva => Integer, critical.deva;
    DeathStat => Integer, critical.death;
    AccuracyStat => Integer, critical.accuracy;

    StrikeTitle => Percent, strike.title;
    WisdomStat => Integer, strike.wisdom;

    PerfectTitle => Percent, perfect.title;
    JusticeStat => Integer, perfect.justice;
    PerfectAccessoryBase => Percent, perfect.accessory_base;

    MultiHitSoulEngraving => Percent, multi_hit.soul_engraving;
    MultiHitManaStone => Percent, multi_hit.mana_stone;
    MultiHitDeva => Percent, multi_hit.deva;

    WeaponMinDamage => Integer, weapon.min;
    WeaponMaxDamage => Integer, weapon.max;
}

impl StatField {
    /// Record key of this field.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn percent_fields() -> impl Iterator<Item = StatField> {
        Self::iter().filter(|field| field.kind() == FieldKind::Percent)
    }

    /// Store `value` into `snapshot`, enforcing the field's storage class.
    ///
    /// Integer fields accept only finite, whole, non-negative values that fit
    /// in `u32`. Percent fields accept any finite value from -100 upward.
    pub fn set(
        self,
        snapshot: &mut CharacterStatSnapshot,
        value: f64,
    ) -> Result<(), ValidationError> {
        let field = self.name();
        if !value.is_finite() {
            return Err(ValidationError::invalid(field, NumericFault::NotFinite));
        }

        match self.slot(snapshot) {
            Slot::Integer(target) => {
                if value < 0.0 {
                    return Err(ValidationError::invalid(field, NumericFault::Negative));
                }
                if value.fract() != 0.0 {
                    return Err(ValidationError::invalid(field, NumericFault::NotInteger));
                }
                if value > f64::from(u32::MAX) {
                    return Err(ValidationError::invalid(field, NumericFault::OutOfRange));
                }
                *target = value as u32;
            }
            Slot::Percent(target) => {
                if value < -100.0 {
                    return Err(ValidationError::invalid(
                        field,
                        NumericFault::BelowMinusHundred,
                    ));
                }
                *target = value;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn names_are_snake_case_keys() {
        assert_eq!(StatField::AttackDeva.name(), "attack_deva");
        assert_eq!(
            StatField::WeaponAmpSoulEngraving.name(),
            "weapon_amp_soul_engraving"
        );
        assert_eq!(
            "pve_amp_ariel".parse::<StatField>().ok(),
            Some(StatField::PveAmpAriel)
        );
    }

    #[test]
    fn every_field_writes_where_it_reads() {
        let mut snapshot = CharacterStatSnapshot::default();
        for (i, field) in StatField::iter().enumerate() {
            let value = (i + 1) as f64;
            field.set(&mut snapshot, value).unwrap();
            assert_eq!(field.value(&snapshot), value, "{field}");
        }
        // No two fields alias the same storage.
        for (i, field) in StatField::iter().enumerate() {
            assert_eq!(field.value(&snapshot), (i + 1) as f64, "{field}");
        }
        assert_eq!(StatField::iter().count(), StatField::COUNT);
    }

    #[test]
    fn integer_fields_reject_fractions_and_negatives() {
        let mut snapshot = CharacterStatSnapshot::default();
        assert_eq!(
            StatField::PowerStat.set(&mut snapshot, 12.5),
            Err(ValidationError::invalid("power_stat", NumericFault::NotInteger))
        );
        assert_eq!(
            StatField::BreakthroughLevel.set(&mut snapshot, -1.0),
            Err(ValidationError::invalid(
                "breakthrough_level",
                NumericFault::Negative
            ))
        );
        assert_eq!(
            StatField::CriticalBase.set(&mut snapshot, 1e12),
            Err(ValidationError::invalid("critical_base", NumericFault::OutOfRange))
        );
    }

    #[test]
    fn percent_fields_accept_negatives_down_to_minus_hundred() {
        let mut snapshot = CharacterStatSnapshot::default();
        StatField::CooldownDeva.set(&mut snapshot, -100.0).unwrap();
        assert_eq!(snapshot.cooldown.deva, -100.0);
        assert!(StatField::CooldownDeva.set(&mut snapshot, -100.01).is_err());
        assert!(StatField::StrikeTitle.set(&mut snapshot, f64::NAN).is_err());
    }
}
