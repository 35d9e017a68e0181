//! Per-stat percentage contributions and their multiplicative composition.

use std::collections::BTreeMap;

use crate::stats::bonus::{Bonus, BonusStack};

/// A stat that contributes an independent factor to the score.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum ContributionKind {
    CombatSpeed,
    WeaponDamageAmp,
    DamageAmp,
    CriticalDamageAmp,
    Skill,
    Cooldown,
    Strike,
    Perfect,
    MultiHit,
}

/// Stat name → percentage contribution.
///
/// Entries are independent; each becomes a factor `1 + c/100` of the total
/// multiplier. Missing entries count as 0.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ContributionBreakdown {
    entries: BTreeMap<ContributionKind, f64>,
}

impl ContributionBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ContributionKind, percent: f64) {
        self.entries.insert(kind, percent);
    }

    /// Contribution of `kind` in percent, 0 when absent.
    pub fn get(&self, kind: ContributionKind) -> f64 {
        self.entries.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContributionKind, f64)> + '_ {
        self.entries.iter().map(|(kind, percent)| (*kind, *percent))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All contributions as a More chain.
    pub fn to_bonus_stack(&self) -> BonusStack {
        let mut stack = BonusStack::new();
        stack.extend(self.entries.values().map(|&percent| Bonus::More(percent)));
        stack
    }

    /// `Π (1 + c_i/100)` over every entry.
    pub fn total_multiplier(&self) -> f64 {
        self.to_bonus_stack().more_product()
    }
}

impl FromIterator<(ContributionKind, f64)> for ContributionBreakdown {
    fn from_iter<I: IntoIterator<Item = (ContributionKind, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
