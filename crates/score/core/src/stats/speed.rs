//! Combat speed and cooldown - Layer 4 of the score pipeline.
//!
//! Formulas:
//! - coefficient(p) = 1 / (1 - p/100), clamped to 1 outside (0, 100)
//! - combat_speed% = soul engraving + accessory base + time × 0.2 + deva + title
//! - cooldown% = title + illusion × 0.2 + deva
//! - cooldown contribution = (coefficient(cooldown%) - 1) × 100 × efficiency

use crate::config::ScoreConfig;
use crate::snapshot::{CombatSpeedSources, CooldownSources};

/// Combat speed percent per time stat point.
pub const TIME_PERCENT_PER_POINT: f64 = 0.2;
/// Cooldown reduction percent per illusion stat point.
pub const ILLUSION_PERCENT_PER_POINT: f64 = 0.2;

/// Throughput multiplier for a speed or cooldown-reduction percentage.
///
/// At 100% the formula is singular; anything at or above it, and anything at
/// or below 0, yields exactly 1.
pub fn coefficient(percent: f64) -> f64 {
    if percent <= 0.0 || percent >= 100.0 {
        return 1.0;
    }
    1.0 / (1.0 - percent / 100.0)
}

/// Summed speed and cooldown percentages with their derived values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedStats {
    pub combat_speed_percent: f64,
    pub cooldown_percent: f64,
    pub speed_coefficient: f64,
    pub cooldown_coefficient: f64,
}

impl SpeedStats {
    pub fn compute(speed: &CombatSpeedSources, cooldown: &CooldownSources) -> Self {
        let combat_speed_percent = speed.soul_engraving
            + speed.accessory_base
            + f64::from(speed.time) * TIME_PERCENT_PER_POINT
            + speed.deva
            + speed.title;
        let cooldown_percent = cooldown.title
            + f64::from(cooldown.illusion) * ILLUSION_PERCENT_PER_POINT
            + cooldown.deva;

        Self {
            combat_speed_percent,
            cooldown_percent,
            speed_coefficient: coefficient(combat_speed_percent),
            cooldown_coefficient: coefficient(cooldown_percent),
        }
    }

    /// Combat speed enters the score at its raw percent.
    pub fn combat_speed_contribution(&self) -> f64 {
        self.combat_speed_percent
    }

    pub fn cooldown_contribution(&self, config: &ScoreConfig) -> f64 {
        (self.cooldown_coefficient - 1.0) * 100.0 * config.cooldown_efficiency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_clamps_at_the_singularity() {
        assert_eq!(coefficient(100.0), 1.0);
        assert_eq!(coefficient(250.0), 1.0);
        assert_eq!(coefficient(0.0), 1.0);
        assert_eq!(coefficient(-30.0), 1.0);
        assert_eq!(coefficient(50.0), 2.0);
        assert!(coefficient(99.9).is_finite());
    }

    #[test]
    fn sums_speed_sources() {
        let speed = CombatSpeedSources {
            soul_engraving: 3.0,
            accessory_base: 4.0,
            time: 50,
            deva: 2.0,
            title: 1.0,
        };
        let stats = SpeedStats::compute(&speed, &CooldownSources::default());
        assert!((stats.combat_speed_percent - 20.0).abs() < 1e-9);
        assert_eq!(stats.combat_speed_contribution(), stats.combat_speed_percent);
        assert_eq!(stats.cooldown_coefficient, 1.0);
    }

    #[test]
    fn cooldown_contribution_is_discounted() {
        let cooldown = CooldownSources {
            title: 10.0,
            illusion: 50,
            deva: 20.0,
        };
        let stats = SpeedStats::compute(&CombatSpeedSources::default(), &cooldown);
        // 40% → coefficient 1/0.6, gain 66.67% × 0.7
        let expected = (1.0 / 0.6 - 1.0) * 100.0 * 0.7;
        assert!((stats.cooldown_contribution(&ScoreConfig::default()) - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_cooldown_contributes_exactly_zero() {
        let stats = SpeedStats::compute(
            &CombatSpeedSources::default(),
            &CooldownSources::default(),
        );
        assert_eq!(stats.cooldown_contribution(&ScoreConfig::default()), 0.0);
    }
}
