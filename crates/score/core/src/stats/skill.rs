//! Skill score aggregation - Layer 3 of the score pipeline.
//!
//! ```text
//! skill_score = (level × 1.5 + milestone) × factor
//! category    = Σ skill_score / slots
//! total       = active + passive + stigma
//! ```
//!
//! Active and passive skills use a rank weight as `factor`: the best skill
//! counts 200%, the worst 20%, linear in between. Stigma skills use an
//! importance factor derived from how commonly each skill is trained.

use std::cmp::Ordering;

use crate::config::ScoreConfig;
use crate::snapshot::{SkillLevel, SkillSet, StigmaSkill};

/// Score points per skill level.
pub const POINTS_PER_LEVEL: f64 = 1.5;

/// Cumulative milestone bonuses, `(level reached, bonus)`.
pub type MilestoneTable = &'static [(u32, f64)];

pub const ACTIVE_MILESTONES: MilestoneTable =
    &[(8, 5.0), (12, 10.0), (16, 15.0), (20, 10.0)];
pub const PASSIVE_MILESTONES: MilestoneTable = &[];
pub const STIGMA_MILESTONES: MilestoneTable =
    &[(5, 5.0), (10, 10.0), (15, 25.0), (20, 40.0)];

/// Sum of every milestone bonus reached at `level`.
pub fn milestone_bonus(level: u32, table: MilestoneTable) -> f64 {
    table
        .iter()
        .filter(|(threshold, _)| level >= *threshold)
        .map(|(_, bonus)| bonus)
        .sum()
}

/// Unweighted score of one skill.
pub fn base_score(level: u32, table: MilestoneTable) -> f64 {
    f64::from(level) * POINTS_PER_LEVEL + milestone_bonus(level, table)
}

/// Rank weight in percent for the skill at zero-based `index` of `count`.
///
/// Interpolates from `rank_weight_max` (first) to `rank_weight_min` (last).
/// A single skill gets the maximum.
pub fn rank_weight(index: usize, count: usize, config: &ScoreConfig) -> f64 {
    if count <= 1 {
        return config.rank_weight_max;
    }
    let last = (count - 1) as f64;
    let i = index as f64;
    (config.rank_weight_max * (last - i) + config.rank_weight_min * i) / last
}

/// Rank-weighted category average over `slots` slots.
///
/// Skills are ordered by base score descending, then name, then level, so
/// the ranking is a total order independent of input order.
pub fn ranked_category_score(
    skills: &[SkillLevel],
    table: MilestoneTable,
    slots: usize,
    config: &ScoreConfig,
) -> f64 {
    let mut scored: Vec<(f64, &SkillLevel)> = skills
        .iter()
        .map(|skill| (base_score(skill.level, table), skill))
        .collect();
    scored.sort_by(|(_, a), (_, b)| compare_ranked(a, b, table));

    let count = scored.len();
    let sum: f64 = scored
        .iter()
        .enumerate()
        .map(|(index, (score, _))| score * rank_weight(index, count, config) / 100.0)
        .sum();
    sum / slots as f64
}

/// The stigma skills that count: highest level first, ties by name.
pub fn select_stigma(stigma: &[StigmaSkill]) -> Vec<&StigmaSkill> {
    let mut selected: Vec<&StigmaSkill> = stigma.iter().collect();
    selected.sort_by(|a, b| {
        b.level
            .cmp(&a.level)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| b.avg_level.total_cmp(&a.avg_level))
    });
    selected.truncate(ScoreConfig::STIGMA_SLOTS);
    selected
}

/// Importance factor of a stigma skill.
///
/// `max(floor, (avg / highest) × scale)`; the ratio is 1 when no selected
/// skill has a positive average.
pub fn stigma_importance(avg_level: f64, highest_avg_level: f64, config: &ScoreConfig) -> f64 {
    let ratio = if highest_avg_level > 0.0 {
        avg_level / highest_avg_level
    } else {
        1.0
    };
    (ratio * config.stigma_importance_scale).max(config.stigma_importance_floor)
}

/// Importance-weighted stigma average over the stigma slots.
pub fn stigma_score(stigma: &[StigmaSkill], config: &ScoreConfig) -> f64 {
    let selected = select_stigma(stigma);
    let highest = selected
        .iter()
        .map(|skill| skill.avg_level)
        .fold(0.0, f64::max);

    let sum: f64 = selected
        .iter()
        .map(|skill| {
            base_score(skill.level, STIGMA_MILESTONES)
                * stigma_importance(skill.avg_level, highest, config)
        })
        .sum();
    sum / ScoreConfig::STIGMA_SLOTS as f64
}

/// Per-category skill scores. `total` is the `skill` contribution percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillScore {
    pub active: f64,
    pub passive: f64,
    pub stigma: f64,
    pub total: f64,
}

impl SkillScore {
    pub fn compute(skills: &SkillSet, config: &ScoreConfig) -> Self {
        let active = ranked_category_score(
            &skills.active,
            ACTIVE_MILESTONES,
            ScoreConfig::MAX_ACTIVE_SKILLS,
            config,
        );
        let passive = ranked_category_score(
            &skills.passive,
            PASSIVE_MILESTONES,
            ScoreConfig::MAX_PASSIVE_SKILLS,
            config,
        );
        let stigma = stigma_score(&skills.stigma, config);

        Self {
            active,
            passive,
            stigma,
            total: active + passive + stigma,
        }
    }
}

/// Ranking order: base score descending, then name, then level descending.
pub fn compare_ranked(a: &SkillLevel, b: &SkillLevel, table: MilestoneTable) -> Ordering {
    base_score(b.level, table)
        .total_cmp(&base_score(a.level, table))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| b.level.cmp(&a.level))
}
