//! Character class archetypes.
//!
//! The class only matters to the attack assembler: each archetype has an
//! attack passive whose per-level percentage counts toward the attack cap.

use strum::EnumCount;

/// Playable class archetype.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClassArchetype {
    /// Two-handed melee
    #[default]
    Gladiator,
    /// Sword-and-shield melee
    Templar,
    /// Dual-wield melee
    Assassin,
    /// Bow
    Ranger,
    /// Spellbook caster
    Sorcerer,
    /// Orb caster with summons
    Spiritmaster,
    /// Healer
    Cleric,
    /// Support melee
    Chanter,
}

/// Attack-% granted per passive skill level, indexed by `ClassArchetype as usize`.
const PASSIVE_ATTACK_RATE: [f64; ClassArchetype::COUNT] = [
    1.0, // Gladiator
    1.0, // Templar
    1.0, // Assassin
    1.5, // Ranger
    1.5, // Sorcerer
    1.0, // Spiritmaster
    0.0, // Cleric
    0.0, // Chanter
];

impl ClassArchetype {
    /// Attack percentage granted per level of the class attack passive.
    pub const fn passive_attack_rate(self) -> f64 {
        PASSIVE_ATTACK_RATE[self as usize]
    }

    /// Attack percentage granted by the passive at `level`.
    pub fn passive_attack_percent(self, level: u32) -> f64 {
        f64::from(level) * self.passive_attack_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn rate_table_follows_declaration_order() {
        let rates: Vec<f64> = ClassArchetype::iter()
            .map(ClassArchetype::passive_attack_rate)
            .collect();
        assert_eq!(rates, [1.0, 1.0, 1.0, 1.5, 1.5, 1.0, 0.0, 0.0]);
        assert_eq!(ClassArchetype::Chanter as usize, ClassArchetype::COUNT - 1);
    }

    #[test]
    fn ranged_casters_get_the_higher_rate() {
        assert_eq!(ClassArchetype::Ranger.passive_attack_percent(10), 15.0);
        assert_eq!(ClassArchetype::Sorcerer.passive_attack_percent(4), 6.0);
        assert_eq!(ClassArchetype::Assassin.passive_attack_percent(10), 10.0);
        assert_eq!(ClassArchetype::Cleric.passive_attack_percent(10), 0.0);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "SpiritMaster".parse::<ClassArchetype>().ok(),
            Some(ClassArchetype::Spiritmaster)
        );
        assert_eq!(ClassArchetype::Templar.as_ref(), "templar");
    }
}
