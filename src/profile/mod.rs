//! Learner profile model
//!
//! A profile is the structured form of everything a learner selects on the
//! dashboard: primary domain, current skills, experience, goals, target
//! skills, pace, weekly hours and learning styles. Profiles are only built
//! through [`ProfileBuilder`], which enforces the vocabulary and range rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

mod builder;

pub use builder::{ProfileBuilder, ProfilePolicy, RawSelections, MAX_WEEKLY_HOURS, MIN_WEEKLY_HOURS};

/// Case-insensitive label match, ignoring surrounding whitespace
fn label_eq(input: &str, label: &str) -> bool {
    input.trim().eq_ignore_ascii_case(label)
}

/// Primary knowledge domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Machine Learning", alias = "ML")]
    MachineLearning,
    #[serde(rename = "Web Development", alias = "Web Dev")]
    WebDevelopment,
    #[serde(rename = "Cloud Computing", alias = "Cloud")]
    CloudComputing,
    #[serde(rename = "DevOps")]
    DevOps,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::DataScience,
        Domain::MachineLearning,
        Domain::WebDevelopment,
        Domain::CloudComputing,
        Domain::DevOps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::DataScience => "Data Science",
            Domain::MachineLearning => "Machine Learning",
            Domain::WebDevelopment => "Web Development",
            Domain::CloudComputing => "Cloud Computing",
            Domain::DevOps => "DevOps",
        }
    }

    /// Compact label used on the domain chart
    pub fn short_label(&self) -> &'static str {
        match self {
            Domain::DataScience => "Data Science",
            Domain::MachineLearning => "ML",
            Domain::WebDevelopment => "Web Dev",
            Domain::CloudComputing => "Cloud",
            Domain::DevOps => "DevOps",
        }
    }

    /// Parse a full or chart label
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| label_eq(s, d.as_str()) || label_eq(s, d.short_label()))
    }

    /// Skills a learner may claim within this domain
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            Domain::DataScience => &["Python", "R", "SQL", "Statistics"],
            Domain::MachineLearning => &["Scikit-learn", "TensorFlow", "PyTorch"],
            Domain::WebDevelopment => &["JavaScript", "React", "Node.js"],
            Domain::CloudComputing => &["AWS", "Azure", "GCP"],
            Domain::DevOps => &["Docker", "Kubernetes", "Jenkins"],
        }
    }

    /// Canonical spelling of `skill` if it belongs to this domain
    pub fn canonical_skill(&self, skill: &str) -> Option<&'static str> {
        self.vocabulary().iter().copied().find(|known| label_eq(skill, known))
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Years of experience, ordered from least to most
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum ExperienceBucket {
    #[serde(rename = "0-1")]
    UnderOne,
    #[serde(rename = "1-3")]
    #[default]
    OneToThree,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10+")]
    TenPlus,
}

impl ExperienceBucket {
    pub const ALL: [ExperienceBucket; 5] = [
        ExperienceBucket::UnderOne,
        ExperienceBucket::OneToThree,
        ExperienceBucket::ThreeToFive,
        ExperienceBucket::FiveToTen,
        ExperienceBucket::TenPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceBucket::UnderOne => "0-1",
            ExperienceBucket::OneToThree => "1-3",
            ExperienceBucket::ThreeToFive => "3-5",
            ExperienceBucket::FiveToTen => "5-10",
            ExperienceBucket::TenPlus => "10+",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| label_eq(s, b.as_str()))
    }
}

/// Career objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CareerGoal {
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "ML Engineer")]
    MlEngineer,
    #[serde(rename = "Full-Stack Developer")]
    FullStackDeveloper,
    #[serde(rename = "Cloud Architect")]
    CloudArchitect,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
}

impl CareerGoal {
    pub const ALL: [CareerGoal; 5] = [
        CareerGoal::DataScientist,
        CareerGoal::MlEngineer,
        CareerGoal::FullStackDeveloper,
        CareerGoal::CloudArchitect,
        CareerGoal::DevOpsEngineer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CareerGoal::DataScientist => "Data Scientist",
            CareerGoal::MlEngineer => "ML Engineer",
            CareerGoal::FullStackDeveloper => "Full-Stack Developer",
            CareerGoal::CloudArchitect => "Cloud Architect",
            CareerGoal::DevOpsEngineer => "DevOps Engineer",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| label_eq(s, g.as_str()))
    }
}

/// Skill area a learner wants to acquire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetSkill {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Cloud Computing")]
    CloudComputing,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Data Engineering")]
    DataEngineering,
    #[serde(rename = "DevOps")]
    DevOps,
}

impl TargetSkill {
    pub const ALL: [TargetSkill; 5] = [
        TargetSkill::AiMl,
        TargetSkill::CloudComputing,
        TargetSkill::WebDevelopment,
        TargetSkill::DataEngineering,
        TargetSkill::DevOps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetSkill::AiMl => "AI/ML",
            TargetSkill::CloudComputing => "Cloud Computing",
            TargetSkill::WebDevelopment => "Web Development",
            TargetSkill::DataEngineering => "Data Engineering",
            TargetSkill::DevOps => "DevOps",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| label_eq(s, t.as_str()))
    }

    /// Domains whose paths teach this skill
    pub fn implied_domains(&self) -> &'static [Domain] {
        match self {
            TargetSkill::AiMl => &[Domain::DataScience, Domain::MachineLearning],
            TargetSkill::CloudComputing => &[Domain::CloudComputing],
            TargetSkill::WebDevelopment => &[Domain::WebDevelopment],
            TargetSkill::DataEngineering => &[Domain::DataScience],
            TargetSkill::DevOps => &[Domain::DevOps, Domain::CloudComputing],
        }
    }
}

impl std::fmt::Display for TargetSkill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred study intensity, ordered from lightest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum StudyPace {
    Light,
    #[default]
    Moderate,
    Intensive,
}

impl StudyPace {
    pub const ALL: [StudyPace; 3] = [StudyPace::Light, StudyPace::Moderate, StudyPace::Intensive];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyPace::Light => "Light",
            StudyPace::Moderate => "Moderate",
            StudyPace::Intensive => "Intensive",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| label_eq(s, p.as_str()))
    }

    /// Share of the declared weekly hours a learner at this pace actually studies
    pub fn multiplier(&self) -> f64 {
        match self {
            StudyPace::Light => 0.75,
            StudyPace::Moderate => 1.0,
            StudyPace::Intensive => 1.25,
        }
    }
}

/// Preferred content format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LearningStyle {
    #[serde(rename = "Video Lectures")]
    VideoLectures,
    #[serde(rename = "Interactive Labs")]
    InteractiveLabs,
    #[serde(rename = "Project-Based")]
    ProjectBased,
    #[serde(rename = "Reading Materials")]
    ReadingMaterials,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::VideoLectures,
        LearningStyle::InteractiveLabs,
        LearningStyle::ProjectBased,
        LearningStyle::ReadingMaterials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::VideoLectures => "Video Lectures",
            LearningStyle::InteractiveLabs => "Interactive Labs",
            LearningStyle::ProjectBased => "Project-Based",
            LearningStyle::ReadingMaterials => "Reading Materials",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| label_eq(s, l.as_str()))
    }
}

/// Validated learner selections
///
/// Fields are private so a profile can only come out of [`ProfileBuilder`]
/// with its invariants intact: every skill belongs to the domain vocabulary
/// and weekly hours lie within [`MIN_WEEKLY_HOURS`]..=[`MAX_WEEKLY_HOURS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearnerProfile {
    domain: Domain,
    skills: BTreeSet<String>,
    experience: ExperienceBucket,
    goals: BTreeSet<CareerGoal>,
    target_skills: BTreeSet<TargetSkill>,
    pace: StudyPace,
    weekly_hours: u32,
    styles: BTreeSet<LearningStyle>,
}

impl LearnerProfile {
    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn experience(&self) -> ExperienceBucket {
        self.experience
    }

    pub fn goals(&self) -> &BTreeSet<CareerGoal> {
        &self.goals
    }

    pub fn target_skills(&self) -> &BTreeSet<TargetSkill> {
        &self.target_skills
    }

    pub fn pace(&self) -> StudyPace {
        self.pace
    }

    pub fn weekly_hours(&self) -> u32 {
        self.weekly_hours
    }

    pub fn styles(&self) -> &BTreeSet<LearningStyle> {
        &self.styles
    }

    /// The profile's domain plus every domain implied by its target skills
    pub fn relevant_domains(&self) -> BTreeSet<Domain> {
        let mut domains = BTreeSet::from([self.domain]);
        for target in &self.target_skills {
            domains.extend(target.implied_domains().iter().copied());
        }
        domains
    }
}
