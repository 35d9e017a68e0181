use crate::error::ValidationError;

/// Score configuration constants and tunable parameters.
///
/// `Default` yields the canonical balance values. Every field is a plain
/// number so alternative balance sheets can be loaded from TOML by callers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScoreConfig {
    /// Attack-% saturation threshold. Percent totals above it are rescaled.
    pub attack_cap_percent: f64,

    /// Fraction of weapon damage amplification that reaches the score.
    pub weapon_amp_efficiency: f64,

    /// Fraction of the theoretical cooldown gain that reaches the score.
    pub cooldown_efficiency: f64,

    /// Innate multi-hit chance (percent) every character has without gear.
    pub baseline_multi_hit_percent: f64,

    /// Damage multiplier of an un-amplified critical hit.
    pub critical_base_multiplier: f64,

    /// Extra damage of a perfect hit, used only by the DPS view.
    pub perfect_dps_bonus: f64,

    /// Rank weight (percent) of the best skill in a category.
    pub rank_weight_max: f64,

    /// Rank weight (percent) of the worst skill in a category.
    pub rank_weight_min: f64,

    /// Lower bound of the stigma importance factor.
    pub stigma_importance_floor: f64,

    /// Scale applied to the stigma average-level ratio.
    pub stigma_importance_scale: f64,
}

impl ScoreConfig {
    // ===== compile-time constants used as type parameters =====
    /// Active skill slots; also the divisor of the active average.
    pub const MAX_ACTIVE_SKILLS: usize = 12;
    /// Passive skill slots; also the divisor of the passive average.
    pub const MAX_PASSIVE_SKILLS: usize = 10;
    /// Stigma skills that count toward the score.
    pub const STIGMA_SLOTS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ATTACK_CAP_PERCENT: f64 = 100.0;
    pub const DEFAULT_WEAPON_AMP_EFFICIENCY: f64 = 0.66;
    pub const DEFAULT_COOLDOWN_EFFICIENCY: f64 = 0.7;
    pub const DEFAULT_BASELINE_MULTI_HIT_PERCENT: f64 = 18.0;
    pub const DEFAULT_CRITICAL_BASE_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_PERFECT_DPS_BONUS: f64 = 0.25;
    pub const DEFAULT_RANK_WEIGHT_MAX: f64 = 200.0;
    pub const DEFAULT_RANK_WEIGHT_MIN: f64 = 20.0;
    pub const DEFAULT_STIGMA_IMPORTANCE_FLOOR: f64 = 0.2;
    pub const DEFAULT_STIGMA_IMPORTANCE_SCALE: f64 = 1.5;

    pub const fn new() -> Self {
        Self {
            attack_cap_percent: Self::DEFAULT_ATTACK_CAP_PERCENT,
            weapon_amp_efficiency: Self::DEFAULT_WEAPON_AMP_EFFICIENCY,
            cooldown_efficiency: Self::DEFAULT_COOLDOWN_EFFICIENCY,
            baseline_multi_hit_percent: Self::DEFAULT_BASELINE_MULTI_HIT_PERCENT,
            critical_base_multiplier: Self::DEFAULT_CRITICAL_BASE_MULTIPLIER,
            perfect_dps_bonus: Self::DEFAULT_PERFECT_DPS_BONUS,
            rank_weight_max: Self::DEFAULT_RANK_WEIGHT_MAX,
            rank_weight_min: Self::DEFAULT_RANK_WEIGHT_MIN,
            stigma_importance_floor: Self::DEFAULT_STIGMA_IMPORTANCE_FLOOR,
            stigma_importance_scale: Self::DEFAULT_STIGMA_IMPORTANCE_SCALE,
        }
    }

    fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("attack_cap_percent", self.attack_cap_percent),
            ("weapon_amp_efficiency", self.weapon_amp_efficiency),
            ("cooldown_efficiency", self.cooldown_efficiency),
            ("baseline_multi_hit_percent", self.baseline_multi_hit_percent),
            ("critical_base_multiplier", self.critical_base_multiplier),
            ("perfect_dps_bonus", self.perfect_dps_bonus),
            ("rank_weight_max", self.rank_weight_max),
            ("rank_weight_min", self.rank_weight_min),
            ("stigma_importance_floor", self.stigma_importance_floor),
            ("stigma_importance_scale", self.stigma_importance_scale),
        ]
    }

    /// Check that every parameter is finite and inside the range the
    /// formulas accept.
    ///
    /// - every value is finite and non-negative
    /// - `critical_base_multiplier > 0`
    /// - `rank_weight_min <= rank_weight_max`
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = self.fields();
        let field = if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            Some(*name)
        } else if let Some((name, _)) = fields.iter().find(|(_, v)| *v < 0.0) {
            Some(*name)
        } else if self.critical_base_multiplier <= 0.0 {
            Some("critical_base_multiplier")
        } else if self.rank_weight_min > self.rank_weight_max {
            Some("rank_weight_min")
        } else {
            None
        };

        match field {
            Some(field) => Err(ValidationError::InvalidConfig { field }),
            None => Ok(()),
        }
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(config: ScoreConfig) -> Option<&'static str> {
        config.validate().err().and_then(|err| err.field())
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ScoreConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_critical_multiplier_is_rejected() {
        let config = ScoreConfig {
            critical_base_multiplier: 0.0,
            ..ScoreConfig::default()
        };
        assert_eq!(rejected(config), Some("critical_base_multiplier"));
    }

    #[test]
    fn negative_values_are_rejected() {
        let config = ScoreConfig {
            attack_cap_percent: -10.0,
            ..ScoreConfig::default()
        };
        assert_eq!(rejected(config), Some("attack_cap_percent"));

        let config = ScoreConfig {
            cooldown_efficiency: -0.7,
            ..ScoreConfig::default()
        };
        assert_eq!(rejected(config), Some("cooldown_efficiency"));
    }

    #[test]
    fn inverted_rank_weights_are_rejected() {
        let config = ScoreConfig {
            rank_weight_max: 20.0,
            rank_weight_min: 200.0,
            ..ScoreConfig::default()
        };
        assert_eq!(rejected(config), Some("rank_weight_min"));

        let flat = ScoreConfig {
            rank_weight_max: 100.0,
            rank_weight_min: 100.0,
            ..ScoreConfig::default()
        };
        assert_eq!(flat.validate(), Ok(()));
    }

    #[test]
    fn non_finite_is_reported_before_range() {
        let config = ScoreConfig {
            attack_cap_percent: -1.0,
            perfect_dps_bonus: f64::NAN,
            ..ScoreConfig::default()
        };
        assert_eq!(rejected(config), Some("perfect_dps_bonus"));
    }
}
