//! DPS-coefficient view.
//!
//! An older, coarser estimate kept for comparison. It multiplies raw
//! coefficients instead of per-stat contributions and never feeds the score.
//!
//! ```text
//! base_dps  = attack × (1 + (weapon + pve + normal)/100) × (1 + skill/100)
//!                    × speed_coefficient × cooldown_coefficient
//! final_dps = base_dps × (1 + perfect/100 × 0.25) × (1 + strike/100)
//!                      × (1 + y(x_total)/100)
//! ```

use crate::config::ScoreConfig;
use crate::stats::bonus::BonusStack;
use crate::stats::critical::perfect_dps_coefficient;
use crate::stats::sheet::StatSheet;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpsEstimate {
    pub base_dps: f64,
    pub final_dps: f64,
}

impl DpsEstimate {
    pub fn from_sheet(sheet: &StatSheet, config: &ScoreConfig) -> Self {
        let amp = &sheet.damage_amp;
        let base_dps = BonusStack::new()
            .more(amp.weapon + amp.pve + amp.normal)
            .more(sheet.skill.total)
            .apply(sheet.attack.final_attack as f64)
            * sheet.speed.speed_coefficient
            * sheet.speed.cooldown_coefficient;

        let final_dps = BonusStack::new()
            .more(perfect_dps_coefficient(sheet.perfect_percent, config) * 100.0)
            .more(sheet.strike_percent)
            .more(sheet.multi_hit.extra_damage_percent)
            .apply(base_dps);

        Self {
            base_dps,
            final_dps,
        }
    }
}
