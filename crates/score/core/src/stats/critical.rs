//! Critical, strike and perfect - Layer 5 of the score pipeline.
//!
//! Critical amplification is not summed with the other damage amps. It is
//! weighted by the chance to crit:
//!
//! ```text
//! p        = min(chance%, 100) / 100
//! base_ev  = (1 - p) + p × 1.5
//! amped_ev = (1 - p) + p × (1.5 + amp%/100)
//! gain     = (amped_ev / base_ev - 1) × 100
//! ```

use crate::config::ScoreConfig;
use crate::snapshot::{CriticalSources, PerfectSources, StrikeSources, WeaponRange};

/// Critical rating percent per death stat point.
pub const DEATH_PERCENT_PER_POINT: f64 = 0.2;
/// Critical rating percent per accuracy stat point.
pub const ACCURACY_PERCENT_PER_POINT: f64 = 0.1;
/// Chance percent per 10 rating points.
pub const CHANCE_PER_TEN_RATING: f64 = 0.7;
/// Strike and perfect percent per wisdom/justice point (0.1% × 2).
pub const STAT_POINT_PERCENT: f64 = 0.1 * 2.0;

/// Critical rating and chance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalStats {
    /// Rounded critical rating after stat multipliers.
    pub rating: u64,
    /// Critical chance in percent; may exceed 100 before use.
    pub chance_percent: f64,
}

impl CriticalStats {
    pub fn compute(sources: &CriticalSources) -> Self {
        let flat = u64::from(sources.base)
            + u64::from(sources.soul_engraving)
            + u64::from(sources.mana_stone)
            + u64::from(sources.deva);
        let percent = f64::from(sources.death) * DEATH_PERCENT_PER_POINT
            + f64::from(sources.accuracy) * ACCURACY_PERCENT_PER_POINT;
        let rating = (flat as f64 * (1.0 + percent / 100.0)).round() as u64;

        Self {
            rating,
            chance_percent: rating as f64 * CHANCE_PER_TEN_RATING / 10.0,
        }
    }

    /// Probability of a critical hit, clamped to [0, 1].
    pub fn probability(&self) -> f64 {
        self.chance_percent.clamp(0.0, 100.0) / 100.0
    }

    /// Expected-value gain of `amp_percent` critical damage amplification.
    pub fn amp_contribution(&self, amp_percent: f64, config: &ScoreConfig) -> f64 {
        critical_amp_gain(self.probability(), amp_percent, config.critical_base_multiplier)
    }
}

/// Percent gain of amplified over unamplified expected damage.
///
/// Zero when `p` is 0 or the amplification is 0; increases with both.
pub fn critical_amp_gain(p: f64, amp_percent: f64, base_multiplier: f64) -> f64 {
    let base_ev = (1.0 - p) + p * base_multiplier;
    let amped_ev = (1.0 - p) + p * (base_multiplier + amp_percent / 100.0);
    (amped_ev / base_ev - 1.0) * 100.0
}

/// Strike percent: title + wisdom × 0.2. Enters the score at full value.
pub fn strike_percent(sources: &StrikeSources) -> f64 {
    sources.title + f64::from(sources.wisdom) * STAT_POINT_PERCENT
}

/// Perfect percent: title + justice × 0.2 + accessory base.
pub fn perfect_percent(sources: &PerfectSources) -> f64 {
    sources.title + f64::from(sources.justice) * STAT_POINT_PERCENT + sources.accessory_base
}

/// Score contribution of perfect hits, scaled by weapon roll variance.
///
/// A perfect hit always rolls max damage, so it is worth more the wider the
/// weapon range. Zero for a 0/0 weapon.
pub fn perfect_contribution(perfect_percent: f64, weapon: WeaponRange) -> f64 {
    let span = weapon.max.saturating_sub(weapon.min);
    let total = u64::from(weapon.max) + u64::from(weapon.min);
    if total == 0 {
        return 0.0;
    }
    perfect_percent * span as f64 / total as f64
}

/// DPS-view perfect coefficient: `perfect%/100 × bonus`.
pub fn perfect_dps_coefficient(perfect_percent: f64, config: &ScoreConfig) -> f64 {
    perfect_percent / 100.0 * config.perfect_dps_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rounds_after_stat_multiplier() {
        let sources = CriticalSources {
            base: 300,
            soul_engraving: 100,
            mana_stone: 50,
            deva: 51,
            death: 50,
            accuracy: 25,
        };
        let stats = CriticalStats::compute(&sources);
        // 501 × 1.125 = 563.625
        assert_eq!(stats.rating, 564);
        assert!((stats.chance_percent - 39.48).abs() < 1e-9);
    }

    #[test]
    fn chance_is_clamped_before_use() {
        let stats = CriticalStats {
            rating: 2000,
            chance_percent: 140.0,
        };
        assert_eq!(stats.probability(), 1.0);
        // Every hit crits: 1.5 → 1.8
        let gain = stats.amp_contribution(30.0, &ScoreConfig::default());
        assert!((gain - 20.0).abs() < 1e-9);
    }

    #[test]
    fn critical_gain_is_zero_without_amp_or_chance() {
        assert_eq!(critical_amp_gain(0.4, 0.0, 1.5), 0.0);
        assert_eq!(critical_amp_gain(0.0, 25.0, 1.5), 0.0);
    }

    #[test]
    fn critical_gain_grows_with_chance_and_amp() {
        let mut previous = 0.0;
        for step in 1..=10 {
            let p = f64::from(step) / 10.0;
            let gain = critical_amp_gain(p, 20.0, 1.5);
            assert!(gain > previous);
            previous = gain;
        }
        assert!(critical_amp_gain(0.5, 30.0, 1.5) > critical_amp_gain(0.5, 20.0, 1.5));
    }

    #[test]
    fn strike_and_perfect_sum_their_sources() {
        let strike = StrikeSources {
            title: 2.0,
            wisdom: 40,
        };
        assert!((strike_percent(&strike) - 10.0).abs() < 1e-9);

        let perfect = PerfectSources {
            title: 1.0,
            justice: 20,
            accessory_base: 3.0,
        };
        assert!((perfect_percent(&perfect) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn perfect_scales_with_weapon_variance() {
        let weapon = WeaponRange { min: 600, max: 1000 };
        // 10 × 400 / 1600
        assert_eq!(perfect_contribution(10.0, weapon), 2.5);
        assert_eq!(perfect_contribution(10.0, WeaponRange::default()), 0.0);
        assert_eq!(
            perfect_contribution(10.0, WeaponRange { min: 800, max: 800 }),
            0.0
        );
        assert!((perfect_dps_coefficient(8.0, &ScoreConfig::default()) - 0.02).abs() < 1e-12);
    }
}
