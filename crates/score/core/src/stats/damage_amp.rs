//! Damage amplification aggregation - Layer 2 of the score pipeline.
//!
//! Each amplification type sums the sources it is eligible for:
//! `type% = Σ source%` over [`ELIGIBILITY`]. Mana stones supply an integer
//! rating converted with [`mana_stone_percent`].

use strum::{EnumCount, IntoEnumIterator};

use crate::snapshot::{AmpSources, DamageAmpSources};

/// Damage amplification type tracked by the score.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum AmpKind {
    Weapon,
    Pve,
    Normal,
    Critical,
}

/// Where a damage amplification percentage comes from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
pub enum AmpSource {
    SoulEngraving,
    EquipmentBase,
    ManaStone,
    Deva,
    Ariel,
    Title,
}

/// Source × type eligibility, indexed `[source][kind]`.
///
/// Columns are weapon, pve, normal, critical.
pub const ELIGIBILITY: [[bool; AmpKind::COUNT]; AmpSource::COUNT] = [
    // weapon pve   normal critical
    [true, true, true, true],    // soul engraving
    [true, true, false, false],  // equipment base
    [true, true, true, true],    // mana stone
    [true, true, true, true],    // deva
    [false, true, false, false], // ariel
    [true, true, true, false],   // title
];

/// Whether `source` may contribute to `kind`.
pub const fn is_eligible(kind: AmpKind, source: AmpSource) -> bool {
    ELIGIBILITY[source as usize][kind as usize]
}

/// Percent granted by a mana stone rating: every 10 points give 0.1%.
pub fn mana_stone_percent(rating: u32) -> f64 {
    f64::from(rating) / 100.0
}

/// Raw value of one source cell, in percent.
pub fn source_percent(sources: &AmpSources, source: AmpSource) -> f64 {
    match source {
        AmpSource::SoulEngraving => sources.soul_engraving,
        AmpSource::EquipmentBase => sources.equipment_base,
        AmpSource::ManaStone => mana_stone_percent(sources.mana_stone),
        AmpSource::Deva => sources.deva,
        AmpSource::Ariel => sources.ariel,
        AmpSource::Title => sources.title,
    }
}

/// Summed damage amplification per type, in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageAmpTotals {
    pub weapon: f64,
    pub pve: f64,
    pub normal: f64,
    pub critical: f64,
}

impl DamageAmpTotals {
    pub fn compute(sources: &DamageAmpSources) -> Self {
        Self {
            weapon: total(AmpKind::Weapon, &sources.weapon),
            pve: total(AmpKind::Pve, &sources.pve),
            normal: total(AmpKind::Normal, &sources.normal),
            critical: total(AmpKind::Critical, &sources.critical),
        }
    }

    /// Weapon amplification after efficiency loss.
    pub fn weapon_contribution(&self, efficiency: f64) -> f64 {
        self.weapon * efficiency
    }

    /// PvE and normal amplification count at full value.
    pub fn general_contribution(&self) -> f64 {
        self.pve + self.normal
    }
}

fn total(kind: AmpKind, sources: &AmpSources) -> f64 {
    AmpSource::iter()
        .filter(|&source| is_eligible(kind, source))
        .map(|source| source_percent(sources, source))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StatField;

    #[test]
    fn eligible_cells_are_exactly_the_feed_fields() {
        for kind in AmpKind::iter() {
            for source in AmpSource::iter() {
                let key = format!("{kind}_amp_{source}");
                assert_eq!(
                    key.parse::<StatField>().is_ok(),
                    is_eligible(kind, source),
                    "{key}"
                );
            }
        }
    }

    #[test]
    fn ineligible_cells_are_ignored() {
        let mut sources = DamageAmpSources::default();
        sources.weapon.ariel = 50.0;
        sources.normal.equipment_base = 12.0;
        sources.critical.title = 8.0;

        assert_eq!(DamageAmpTotals::compute(&sources), DamageAmpTotals::default());
    }

    #[test]
    fn sums_sources_and_converts_mana_stones() {
        let mut sources = DamageAmpSources::default();
        sources.pve = AmpSources {
            soul_engraving: 2.0,
            equipment_base: 3.0,
            mana_stone: 250,
            deva: 1.0,
            ariel: 4.0,
            title: 1.5,
        };

        let totals = DamageAmpTotals::compute(&sources);
        assert!((totals.pve - 14.0).abs() < 1e-9);
        assert_eq!(totals.weapon, 0.0);
        assert!((mana_stone_percent(250) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn weapon_amp_loses_a_third() {
        let totals = DamageAmpTotals {
            weapon: 10.0,
            pve: 4.0,
            normal: 6.0,
            critical: 0.0,
        };
        assert!((totals.weapon_contribution(0.66) - 6.6).abs() < 1e-12);
        assert_eq!(totals.general_contribution(), 10.0);
    }
}
