//! pathwise - preference-to-path selector
//!
//! Validates learner selections into a [`LearnerProfile`], ranks a frozen
//! [`PathCatalog`] against it and derives the analytics shown next to the
//! recommendations. Everything here is synchronous and free of I/O except
//! the seed and settings loaders.

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod error;
pub mod profile;
pub mod ranking;
pub mod report;

pub use analytics::{summarize, AnalyticsAggregator, AnalyticsConfig, AnalyticsSummary, DashboardMetrics};
pub use catalog::{default_catalog, load_catalog, Difficulty, LearningPath, PathCatalog};
pub use config::{load_settings, Settings};
pub use error::{AnalyticsError, CatalogError, ConfigError, ValidationError};
pub use profile::{
    CareerGoal, Domain, ExperienceBucket, LearnerProfile, LearningStyle, ProfileBuilder, ProfilePolicy,
    RawSelections, StudyPace, TargetSkill,
};
pub use ranking::{rank, RankedResult, RankingConfig, RankingWeights, Selector};
