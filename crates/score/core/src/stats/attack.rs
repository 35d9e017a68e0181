//! Attack assembly - Layer 1 of the score pipeline.
//!
//! Formulas:
//! - base_sum = deva + equipment + breakthrough × 30
//! - final_attack = floor(base_sum × (1 + percent_multiplier/100)) + pve
//! - percent_multiplier = breakthrough% + destruction% + power%
//!
//! The class passive does not scale attack directly; it only counts toward
//! the saturation cap together with the three percentages above.

use super::bonus::{BonusStack, floor_tolerant};
use crate::class::ClassArchetype;
use crate::config::ScoreConfig;
use crate::snapshot::AttackSources;

/// Flat attack per breakthrough level.
pub const BREAKTHROUGH_FLAT_PER_LEVEL: u64 = 30;
/// Attack-% per breakthrough level.
pub const BREAKTHROUGH_PERCENT_PER_LEVEL: f64 = 1.0;
/// Attack-% per destruction stat point.
pub const DESTRUCTION_PERCENT_PER_POINT: f64 = 0.2;
/// Attack-% per power stat point.
pub const POWER_PERCENT_PER_POINT: f64 = 0.1;

/// Every intermediate of attack assembly, kept for reporting.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackBreakdown {
    /// deva + equipment + breakthrough flat.
    pub base_sum: u64,
    pub breakthrough_percent: f64,
    pub destruction_percent: f64,
    pub power_percent: f64,
    /// Class passive percentage; counts toward the cap only.
    pub passive_percent: f64,
    /// Percent applied to `base_sum`.
    pub percent_multiplier: f64,
    /// Percent compared against the saturation limit.
    pub total_cap_percent: f64,
    pub pve_bonus: u64,
    /// Attack before the cap is applied.
    pub uncapped_attack: u64,
    /// Attack the score is computed from.
    pub final_attack: u64,
}

impl AttackBreakdown {
    pub fn compute(
        sources: &AttackSources,
        class: ClassArchetype,
        config: &ScoreConfig,
    ) -> Self {
        let base_sum = u64::from(sources.deva)
            + u64::from(sources.equipment)
            + u64::from(sources.breakthrough_level) * BREAKTHROUGH_FLAT_PER_LEVEL;

        let breakthrough_percent =
            f64::from(sources.breakthrough_level) * BREAKTHROUGH_PERCENT_PER_LEVEL;
        let destruction_percent = f64::from(sources.destruction) * DESTRUCTION_PERCENT_PER_POINT;
        let power_percent = f64::from(sources.power) * POWER_PERCENT_PER_POINT;
        let passive_percent = class.passive_attack_percent(sources.passive_level);

        let stack = BonusStack::new()
            .flat(base_sum as f64)
            .increased(breakthrough_percent)
            .increased(destruction_percent)
            .increased(power_percent);
        let percent_multiplier = stack.increased_sum();
        let total_cap_percent = percent_multiplier + passive_percent;

        let pve_bonus = u64::from(sources.pve);
        let uncapped_attack = floor_tolerant(stack.apply(0.0)) as u64 + pve_bonus;
        let final_attack =
            apply_attack_cap(uncapped_attack, total_cap_percent, config.attack_cap_percent);

        Self {
            base_sum,
            breakthrough_percent,
            destruction_percent,
            power_percent,
            passive_percent,
            percent_multiplier,
            total_cap_percent,
            pve_bonus,
            uncapped_attack,
            final_attack,
        }
    }

    /// Whether the saturation cap reduced the attack.
    pub fn is_capped(&self) -> bool {
        self.final_attack != self.uncapped_attack
    }
}

/// Rescale attack whose percent total exceeds `limit`.
///
/// ```text
/// capped = floor(attack × (1 + limit/100) / (1 + total/100))   if total > limit
///        = attack                                              otherwise
/// ```
///
/// With the default limit of 100 this is `floor(attack × 2 / (1 + total/100))`.
pub fn apply_attack_cap(final_attack: u64, total_cap_percent: f64, limit: f64) -> u64 {
    if total_cap_percent <= limit {
        return final_attack;
    }
    let scale = (1.0 + limit / 100.0) / (1.0 + total_cap_percent / 100.0);
    floor_tolerant(final_attack as f64 * scale) as u64
}
