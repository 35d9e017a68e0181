//! StatSheet - every derived value of one snapshot.
//!
//! The sheet computes each layer once from the immutable snapshot. Layers
//! never read each other except through the sheet, so the contributions
//! stay independent.

use super::attack::AttackBreakdown;
use super::critical::{
    CriticalStats, perfect_contribution, perfect_percent, strike_percent,
};
use super::damage_amp::DamageAmpTotals;
use super::multi_hit::MultiHitStats;
use super::skill::SkillScore;
use super::speed::SpeedStats;
use crate::config::ScoreConfig;
use crate::contribution::{ContributionBreakdown, ContributionKind};
use crate::snapshot::{CharacterStatSnapshot, WeaponRange};

/// Derived stats of a character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSheet {
    /// Attack assembly (Layer 1)
    pub attack: AttackBreakdown,

    /// Damage amplification per type (Layer 2)
    pub damage_amp: DamageAmpTotals,

    /// Skill category scores (Layer 3)
    pub skill: SkillScore,

    /// Combat speed and cooldown (Layer 4)
    pub speed: SpeedStats,

    /// Critical rating and chance (Layer 5)
    pub critical: CriticalStats,
    pub strike_percent: f64,
    pub perfect_percent: f64,
    pub weapon: WeaponRange,

    /// Multi-hit chance (Layer 6)
    pub multi_hit: MultiHitStats,
}

impl StatSheet {
    /// Compute all layers. The snapshot must already be validated.
    pub fn compute(snapshot: &CharacterStatSnapshot, config: &ScoreConfig) -> Self {
        Self {
            attack: AttackBreakdown::compute(&snapshot.attack, snapshot.class, config),
            damage_amp: DamageAmpTotals::compute(&snapshot.damage_amp),
            skill: SkillScore::compute(&snapshot.skills, config),
            speed: SpeedStats::compute(&snapshot.combat_speed, &snapshot.cooldown),
            critical: CriticalStats::compute(&snapshot.critical),
            strike_percent: strike_percent(&snapshot.strike),
            perfect_percent: perfect_percent(&snapshot.perfect),
            weapon: snapshot.weapon,
            multi_hit: MultiHitStats::compute(&snapshot.multi_hit, config),
        }
    }

    /// Contribution of a single stat, in percent.
    pub fn contribution(&self, kind: ContributionKind, config: &ScoreConfig) -> f64 {
        match kind {
            ContributionKind::CombatSpeed => self.speed.combat_speed_contribution(),
            ContributionKind::WeaponDamageAmp => self
                .damage_amp
                .weapon_contribution(config.weapon_amp_efficiency),
            ContributionKind::DamageAmp => self.damage_amp.general_contribution(),
            ContributionKind::CriticalDamageAmp => self
                .critical
                .amp_contribution(self.damage_amp.critical, config),
            ContributionKind::Skill => self.skill.total,
            ContributionKind::Cooldown => self.speed.cooldown_contribution(config),
            ContributionKind::Strike => self.strike_percent,
            ContributionKind::Perfect => perfect_contribution(self.perfect_percent, self.weapon),
            ContributionKind::MultiHit => self.multi_hit.contribution(config),
        }
    }

    /// Every contribution, one entry per [`ContributionKind`].
    pub fn contributions(&self, config: &ScoreConfig) -> ContributionBreakdown {
        use strum::IntoEnumIterator;

        ContributionKind::iter()
            .map(|kind| (kind, self.contribution(kind, config)))
            .collect()
    }
}
