//! Multi-hit - Layer 6 of the score pipeline.
//!
//! A multi-hit proc adds one to four extra hits. Its expected extra damage
//! in percent is a quartic in the proc chance:
//!
//! ```text
//! y(x) = 11.1x + 13.9x² + 17.8x³ + 23.9x⁴
//! ```
//!
//! Every character has an innate baseline chance, so the score counts only
//! the gain over that baseline.

use crate::config::ScoreConfig;
use crate::snapshot::MultiHitSources;

/// Coefficients of `y(x)`, lowest power first.
pub const POLYNOMIAL: [f64; 4] = [11.1, 13.9, 17.8, 23.9];

/// Expected extra damage percent at proc chance `x` (a fraction).
pub fn expected_extra_damage(x: f64) -> f64 {
    // Horner form of Σ c_i x^(i+1)
    POLYNOMIAL.iter().rev().fold(0.0, |acc, c| (acc + c) * x)
}

/// Multi-hit chance and its score gain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiHitStats {
    /// Chance from gear and boards, excluding the baseline.
    pub stat_percent: f64,
    /// Baseline plus stat chance.
    pub total_percent: f64,
    /// `y(total/100)`, the DPS-view multi-hit coefficient in percent.
    pub extra_damage_percent: f64,
}

impl MultiHitStats {
    pub fn compute(sources: &MultiHitSources, config: &ScoreConfig) -> Self {
        let stat_percent = sources.soul_engraving + sources.mana_stone + sources.deva;
        let total_percent = config.baseline_multi_hit_percent + stat_percent;
        Self {
            stat_percent,
            total_percent,
            extra_damage_percent: expected_extra_damage(total_percent / 100.0),
        }
    }

    /// Gain over the baseline chance, in percent.
    ///
    /// Exactly 0 when no stat chance is present.
    pub fn contribution(&self, config: &ScoreConfig) -> f64 {
        let baseline = expected_extra_damage(config.baseline_multi_hit_percent / 100.0);
        ((1.0 + self.extra_damage_percent / 100.0) / (1.0 + baseline / 100.0) - 1.0) * 100.0
    }
}
