//! Score engine entry points.
//!
//! ```text
//! snapshot ──validate──► StatSheet ──► ContributionBreakdown
//!                                             │
//!              combat_score = floor(attack × Π (1 + c/100))
//! ```
//!
//! # Rounding
//!
//! Every floor in the pipeline (attack assembly, the attack cap and the final
//! score) goes through [`floor_tolerant`]: a value within 1e-6 below an
//! integer counts as that integer. Products such as `5000 × 1.32` come out
//! as `6599.999…` in binary floating point and must still floor to 6600.
//! Stat inputs are integers or percentages with at most a few decimals, so
//! no genuine result sits that close below an integer.
//!
//! A result that leaves the representable range is rejected: each factor
//! `1 + c/100` must be finite and non-negative, and the score must fit in
//! `u64`.

use crate::config::ScoreConfig;
use crate::contribution::ContributionBreakdown;
use crate::dps::DpsEstimate;
use crate::error::{NumericFault, ValidationError};
use crate::snapshot::CharacterStatSnapshot;
use crate::stats::attack::AttackBreakdown;
use crate::stats::bonus::floor_tolerant;
use crate::stats::sheet::StatSheet;

/// The headline numbers of one computation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatScoreResult {
    /// Attack after the saturation cap.
    pub final_attack: u64,
    pub total_multiplier: f64,
    /// `floor(final_attack × total_multiplier)`
    pub combat_score: u64,
}

/// Everything one computation yields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreReport {
    pub result: CombatScoreResult,
    pub breakdown: ContributionBreakdown,
    pub attack: AttackBreakdown,
    pub dps: DpsEstimate,
}

impl ScoreReport {
    pub fn combat_score(&self) -> u64 {
        self.result.combat_score
    }
}

/// Stateless score calculator bound to one balance configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreEngine {
    config: ScoreConfig,
}

impl ScoreEngine {
    pub const fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    /// Validate `snapshot` and compute its score report.
    ///
    /// Nothing is computed unless both the config and the snapshot pass
    /// validation.
    pub fn compute(&self, snapshot: &CharacterStatSnapshot) -> Result<ScoreReport, ValidationError> {
        self.config.validate()?;
        snapshot.validate()?;

        let sheet = StatSheet::compute(snapshot, &self.config);
        let breakdown = sheet.contributions(&self.config);
        let dps = DpsEstimate::from_sheet(&sheet, &self.config);

        check_factors(&breakdown)?;

        let final_attack = sheet.attack.final_attack;
        let total_multiplier = breakdown.total_multiplier();
        if !total_multiplier.is_finite() {
            return Err(out_of_range("total_multiplier"));
        }
        let combat_score = floor_tolerant(final_attack as f64 * total_multiplier);
        if combat_score >= u64::MAX as f64 {
            return Err(out_of_range("combat_score"));
        }
        let combat_score = combat_score as u64;

        Ok(ScoreReport {
            result: CombatScoreResult {
                final_attack,
                total_multiplier,
                combat_score,
            },
            breakdown,
            attack: sheet.attack,
            dps,
        })
    }
}

/// Every factor `1 + c/100` must be finite and non-negative.
fn check_factors(breakdown: &ContributionBreakdown) -> Result<(), ValidationError> {
    for (kind, percent) in breakdown.iter() {
        let factor = 1.0 + percent / 100.0;
        if !factor.is_finite() || factor < 0.0 {
            return Err(out_of_range(kind.into()));
        }
    }
    Ok(())
}

fn out_of_range(field: &'static str) -> ValidationError {
    ValidationError::invalid(field, NumericFault::OutOfRange)
}

/// Score `snapshot` with the default balance configuration.
pub fn compute_combat_score(
    snapshot: &CharacterStatSnapshot,
) -> Result<ScoreReport, ValidationError> {
    ScoreEngine::default().compute(snapshot)
}
