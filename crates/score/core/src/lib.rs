//! Deterministic combat-score calculation for guild roster characters.
//!
//! `score-core` turns one [`CharacterStatSnapshot`] into a [`ScoreReport`]:
//! the headline combat score plus the percentage each stat contributes.
//! Everything is a pure function of the snapshot and a [`ScoreConfig`]; the
//! crate does no I/O and keeps no state between calls.
pub mod class;
pub mod config;
pub mod contribution;
pub mod dps;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod stats;

pub use class::ClassArchetype;
pub use config::ScoreConfig;
pub use contribution::{ContributionBreakdown, ContributionKind};
pub use dps::DpsEstimate;
pub use engine::{CombatScoreResult, ScoreEngine, ScoreReport, compute_combat_score};
pub use error::{ErrorSeverity, NumericFault, ValidationError};
pub use snapshot::{
    ActiveSkills, AmpSources, AttackSources, CharacterStatSnapshot, CombatSpeedSources,
    CooldownSources, CriticalSources, DamageAmpSources, FieldKind, MultiHitSources,
    PassiveSkills, PerfectSources, SkillLevel, SkillSet, StatField, StigmaSkill, StrikeSources,
    WeaponRange,
};
pub use stats::{AttackBreakdown, StatSheet, apply_attack_cap};
