//! Skill level inputs grouped by category.

use arrayvec::ArrayVec;

use crate::config::ScoreConfig;
use crate::error::{NumericFault, ValidationError};

/// Level of one active or passive skill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLevel {
    /// Skill identifier; breaks ranking ties.
    pub name: String,
    pub level: u32,
}

impl SkillLevel {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// Level of one stigma skill plus its population-average level.
///
/// `avg_level` is how high this skill is typically trained across the player
/// base. It drives the importance factor: commonly maxed stigmas matter more.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StigmaSkill {
    pub name: String,
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avg_level: f64,
}

impl StigmaSkill {
    pub fn new(name: impl Into<String>, level: u32, avg_level: f64) -> Self {
        Self {
            name: name.into(),
            level,
            avg_level,
        }
    }
}

pub type ActiveSkills = ArrayVec<SkillLevel, { ScoreConfig::MAX_ACTIVE_SKILLS }>;
pub type PassiveSkills = ArrayVec<SkillLevel, { ScoreConfig::MAX_PASSIVE_SKILLS }>;

/// All skill inputs of a character.
///
/// Active and passive slots are bounded by type; the stigma pool is not,
/// since only the best [`ScoreConfig::STIGMA_SLOTS`] entries are scored.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SkillSet {
    pub active: ActiveSkills,
    pub passive: PassiveSkills,
    pub stigma: Vec<StigmaSkill>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from unbounded lists, rejecting overfull categories.
    pub fn from_lists(
        active: Vec<SkillLevel>,
        passive: Vec<SkillLevel>,
        stigma: Vec<StigmaSkill>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            active: bounded("active", active)?,
            passive: bounded("passive", passive)?,
            stigma,
        })
    }

    /// Add an active skill (builder pattern).
    pub fn with_active(mut self, name: &str, level: u32) -> Result<Self, ValidationError> {
        push_bounded("active", &mut self.active, SkillLevel::new(name, level))?;
        Ok(self)
    }

    /// Add a passive skill (builder pattern).
    pub fn with_passive(mut self, name: &str, level: u32) -> Result<Self, ValidationError> {
        push_bounded("passive", &mut self.passive, SkillLevel::new(name, level))?;
        Ok(self)
    }

    /// Add a stigma skill (builder pattern).
    pub fn with_stigma(mut self, name: &str, level: u32, avg_level: f64) -> Self {
        self.stigma.push(StigmaSkill::new(name, level, avg_level));
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        for skill in &self.stigma {
            if !skill.avg_level.is_finite() {
                return Err(ValidationError::invalid(
                    "stigma_skills.avg_level",
                    NumericFault::NotFinite,
                ));
            }
            if skill.avg_level < 0.0 {
                return Err(ValidationError::invalid(
                    "stigma_skills.avg_level",
                    NumericFault::Negative,
                ));
            }
        }
        Ok(())
    }
}

fn bounded<const N: usize>(
    category: &'static str,
    skills: Vec<SkillLevel>,
) -> Result<ArrayVec<SkillLevel, N>, ValidationError> {
    if skills.len() > N {
        return Err(ValidationError::TooManySkills {
            category,
            count: skills.len(),
            max: N,
        });
    }
    Ok(skills.into_iter().collect())
}

fn push_bounded<const N: usize>(
    category: &'static str,
    slots: &mut ArrayVec<SkillLevel, N>,
    skill: SkillLevel,
) -> Result<(), ValidationError> {
    slots
        .try_push(skill)
        .map_err(|_| ValidationError::TooManySkills {
            category,
            count: N + 1,
            max: N,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overfull_active_list_is_rejected() {
        let active = (0..13).map(|i| SkillLevel::new(format!("a{i}"), 1)).collect();
        let err = SkillSet::from_lists(active, Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooManySkills {
                category: "active",
                count: 13,
                max: 12
            }
        );
    }

    #[test]
    fn builder_stops_at_passive_capacity() {
        let mut set = SkillSet::new();
        for i in 0..10 {
            set = set.with_passive(&format!("p{i}"), 3).unwrap();
        }
        assert!(set.with_passive("p10", 3).is_err());
    }

    #[test]
    fn negative_average_level_is_rejected() {
        let set = SkillSet::new().with_stigma("veil", 10, -1.0);
        assert_eq!(
            set.validate(),
            Err(ValidationError::invalid(
                "stigma_skills.avg_level",
                NumericFault::Negative
            ))
        );
    }
}
