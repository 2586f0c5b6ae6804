//! Raw selection validation
//!
//! Turns the loosely typed values captured by UI controls into a
//! [`LearnerProfile`]. Nothing is silently corrected: an unknown label, a
//! skill outside the domain vocabulary or an out-of-range hour count is
//! returned to the caller as a [`ValidationError`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use super::{
    CareerGoal, Domain, ExperienceBucket, LearnerProfile, LearningStyle, StudyPace, TargetSkill,
};
use crate::error::ValidationError;

/// Lowest accepted weekly commitment
pub const MIN_WEEKLY_HOURS: i64 = 2;

/// Highest accepted weekly commitment
pub const MAX_WEEKLY_HOURS: i64 = 40;

/// Selections exactly as captured by the presentation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSelections {
    pub domain: String,
    pub skills: Vec<String>,
    /// Defaults to "1-3" when absent
    pub experience: Option<String>,
    pub goals: Vec<String>,
    pub target_skills: Vec<String>,
    /// Defaults to "Moderate" when absent
    pub pace: Option<String>,
    pub weekly_hours: i64,
    pub styles: Vec<String>,
}

/// Policy knobs for profile construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePolicy {
    /// Reject profiles with no target skill
    pub require_target_skill: bool,
}

/// Validates raw selections into learner profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    policy: ProfilePolicy,
}

impl ProfileBuilder {
    pub fn new(policy: ProfilePolicy) -> Self {
        Self { policy }
    }

    /// Build a profile from raw selections
    pub fn build(&self, raw: &RawSelections) -> Result<LearnerProfile, ValidationError> {
        let domain = Domain::from_label(&raw.domain).ok_or_else(|| unknown("domain", &raw.domain))?;

        let mut skills = BTreeSet::new();
        for skill in &raw.skills {
            let canonical = domain.canonical_skill(skill).ok_or_else(|| ValidationError::InvalidSkill {
                domain: domain.to_string(),
                skill: skill.trim().to_string(),
            })?;
            skills.insert(canonical.to_string());
        }

        let experience = match &raw.experience {
            Some(label) => ExperienceBucket::from_label(label).ok_or_else(|| unknown("experience", label))?,
            None => ExperienceBucket::default(),
        };

        let goals = parse_all("career goal", &raw.goals, CareerGoal::from_label)?;
        let target_skills = parse_all("target skill", &raw.target_skills, TargetSkill::from_label)?;
        if self.policy.require_target_skill && target_skills.is_empty() {
            return Err(ValidationError::EmptySelection { field: "target skill" });
        }

        let pace = match &raw.pace {
            Some(label) => StudyPace::from_label(label).ok_or_else(|| unknown("study pace", label))?,
            None => StudyPace::default(),
        };

        if !(MIN_WEEKLY_HOURS..=MAX_WEEKLY_HOURS).contains(&raw.weekly_hours) {
            return Err(ValidationError::OutOfRange {
                field: "weekly hours",
                value: raw.weekly_hours,
                min: MIN_WEEKLY_HOURS,
                max: MAX_WEEKLY_HOURS,
            });
        }

        let styles = parse_all("learning style", &raw.styles, LearningStyle::from_label)?;

        let profile = LearnerProfile {
            domain,
            skills,
            experience,
            goals,
            target_skills,
            pace,
            // range checked above
            weekly_hours: raw.weekly_hours as u32,
            styles,
        };
        debug!(
            "Built profile: domain={} skills={} targets={} hours={}",
            profile.domain,
            profile.skills.len(),
            profile.target_skills.len(),
            profile.weekly_hours
        );
        Ok(profile)
    }
}

fn unknown(field: &'static str, value: &str) -> ValidationError {
    ValidationError::UnknownOption {
        field,
        value: value.trim().to_string(),
    }
}

fn parse_all<T: Ord>(
    field: &'static str,
    labels: &[String],
    parse: fn(&str) -> Option<T>,
) -> Result<BTreeSet<T>, ValidationError> {
    labels
        .iter()
        .map(|label| parse(label).ok_or_else(|| unknown(field, label)))
        .collect()
}
