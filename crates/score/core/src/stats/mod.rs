//! Stat pipeline - layered derivation from snapshot to contributions.
//!
//! # Architecture
//!
//! ```text
//! [ Attack assembly + cap (Layer 1) ]
//! [ Damage amplification (Layer 2) ]
//! [ Skill scores (Layer 3) ]
//! [ Speed / Cooldown (Layer 4) ]
//! [ Critical / Strike / Perfect (Layer 5) ]
//! [ Multi-hit (Layer 6) ]
//!      ↓
//! [ StatSheet ] → ContributionBreakdown → Π (1 + c/100)
//! ```
//!
//! ## Principles
//!
//! 1. **Independent layers**: each reads only the snapshot and the config
//! 2. **Deterministic**: pure functions, stable orderings, no I/O
//! 3. **Explicit percent**: 20 means 20%; formulas divide by 100 themselves
//!
//! ## Bonus Stack
//!
//! Attack uses `Flat → %Inc`; the final composition is a pure `More` chain.

pub mod attack;
pub mod bonus;
pub mod critical;
pub mod damage_amp;
pub mod multi_hit;
pub mod sheet;
pub mod skill;
pub mod speed;

pub use attack::{AttackBreakdown, apply_attack_cap};
pub use bonus::{Bonus, BonusStack, floor_tolerant};
pub use critical::{CriticalStats, critical_amp_gain};
pub use damage_amp::{AmpKind, AmpSource, DamageAmpTotals};
pub use multi_hit::MultiHitStats;
pub use sheet::StatSheet;
pub use skill::SkillScore;
pub use speed::{SpeedStats, coefficient};
