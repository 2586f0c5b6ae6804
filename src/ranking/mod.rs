//! Path selection and ranking
//!
//! Ranking is a pure function of a learner profile and the frozen catalog:
//!
//! 1. Candidates are paths covering the profile's domain or a domain implied
//!    by one of its target skills.
//! 2. Each candidate gets a weighted score from four terms in 0.0..=1.0:
//!    target-skill overlap, domain match, normalized rating and pace fit.
//! 3. Results sort by score, then rating, then enrollment, then catalog
//!    order, so equal inputs always produce the same list.
//!
//! No candidates is a valid outcome and yields an empty list.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

use crate::catalog::{LearningPath, PathCatalog, MAX_RATING};
use crate::error::ConfigError;
use crate::profile::{LearnerProfile, TargetSkill};

mod pace;
mod weights;

pub use pace::{DifficultyHours, PacePolicy};
pub use weights::RankingWeights;

/// Domain match credit for paths reached only through target skills
const IMPLIED_DOMAIN_MATCH: f64 = 0.5;

/// Ranking policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub weights: RankingWeights,
    pub difficulty_hours: DifficultyHours,
    /// Relative pace deviation accepted without penalty
    pub pace_tolerance: f64,
    /// Decay rate of the pace fit past the tolerance band
    pub pace_decay: f64,
    /// Keep at most this many results
    pub max_results: Option<usize>,
    /// Drop results scoring below this
    pub min_score: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        let pace = PacePolicy::default();
        Self {
            weights: RankingWeights::default(),
            difficulty_hours: pace.hours,
            pace_tolerance: pace.tolerance,
            pace_decay: pace.decay,
            max_results: None,
            min_score: 0.0,
        }
    }
}

impl RankingConfig {
    /// Check value ranges the type system cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = self.weights.as_array();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(invalid("ranking.weights", "weights must be finite and non-negative"));
        }
        if weights.iter().all(|w| *w == 0.0) {
            return Err(invalid("ranking.weights", "at least one weight must be positive"));
        }
        if !self.pace_tolerance.is_finite() || self.pace_tolerance < 0.0 {
            return Err(invalid("ranking.pace_tolerance", "must be zero or positive"));
        }
        if !self.pace_decay.is_finite() || self.pace_decay <= 0.0 {
            return Err(invalid("ranking.pace_decay", "must be positive"));
        }
        let hours = self.difficulty_hours;
        if [hours.beginner, hours.intermediate, hours.advanced]
            .iter()
            .any(|h| !h.is_finite() || *h <= 0.0)
        {
            return Err(invalid("ranking.difficulty_hours", "hours must be positive"));
        }
        if !self.min_score.is_finite() {
            return Err(invalid("ranking.min_score", "must be a finite number"));
        }
        Ok(())
    }

    pub fn pace_policy(&self) -> PacePolicy {
        PacePolicy {
            hours: self.difficulty_hours,
            tolerance: self.pace_tolerance,
            decay: self.pace_decay,
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}

/// Unweighted score terms, each in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skill_overlap: f64,
    pub domain_match: f64,
    pub rating: f64,
    pub pace_fit: f64,
}

impl ScoreBreakdown {
    fn weighted(&self, weights: &RankingWeights) -> f64 {
        weights.skill_overlap * self.skill_overlap
            + weights.domain_match * self.domain_match
            + weights.rating * self.rating
            + weights.pace_fit * self.pace_fit
    }
}

/// A candidate path with its match score
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult<'a> {
    pub path: &'a LearningPath,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Profile target skills the path teaches
    pub matched_skills: Vec<TargetSkill>,
    /// Profile target skills the path does not teach
    pub unmatched_skills: Vec<TargetSkill>,
    #[serde(skip)]
    position: usize,
}

impl RankedResult<'_> {
    /// Position of the path in the catalog
    pub fn catalog_position(&self) -> usize {
        self.position
    }
}

/// Scores and orders catalog paths against learner profiles
#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: RankingConfig,
    pace: PacePolicy,
}

impl Selector {
    /// Create a selector, rejecting weights or pace parameters out of range
    pub fn new(config: RankingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pace = config.pace_policy();
        Ok(Self { config, pace })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Rank the catalog for a profile
    pub fn rank<'a>(&self, profile: &LearnerProfile, catalog: &'a PathCatalog) -> Vec<RankedResult<'a>> {
        let domains = profile.relevant_domains();

        let mut results: Vec<RankedResult<'a>> = catalog
            .all()
            .iter()
            .enumerate()
            .filter(|(_, path)| path.domains().iter().any(|d| domains.contains(d)))
            .map(|(position, path)| self.score(profile, path, position))
            .filter(|result| result.score >= self.config.min_score)
            .collect();

        debug!(
            "Ranking {} candidates out of {} paths for domain {}",
            results.len(),
            catalog.len(),
            profile.domain()
        );

        results.sort_by(compare);
        if let Some(limit) = self.config.max_results {
            results.truncate(limit);
        }

        for result in &results {
            debug!("  {:.4} {}", result.score, result.path.id());
        }
        results
    }

    fn score<'a>(&self, profile: &LearnerProfile, path: &'a LearningPath, position: usize) -> RankedResult<'a> {
        let path_targets: BTreeSet<TargetSkill> = path.target_skills().iter().copied().collect();
        let (matched_skills, unmatched_skills): (Vec<TargetSkill>, Vec<TargetSkill>) = profile
            .target_skills()
            .iter()
            .copied()
            .partition(|skill| path_targets.contains(skill));

        let wanted = profile.target_skills().len();
        let skill_overlap = if wanted > 0 {
            matched_skills.len() as f64 / wanted as f64
        } else {
            0.0
        };

        let domain_match = if path.covers_domain(profile.domain()) {
            1.0
        } else {
            IMPLIED_DOMAIN_MATCH
        };

        let breakdown = ScoreBreakdown {
            skill_overlap,
            domain_match,
            rating: path.rating() / MAX_RATING,
            pace_fit: self.pace.fit(
                path.duration_weeks(),
                path.difficulty(),
                profile.pace(),
                profile.weekly_hours(),
            ),
        };

        RankedResult {
            path,
            score: breakdown.weighted(&self.config.weights),
            breakdown,
            matched_skills,
            unmatched_skills,
            position,
        }
    }
}

/// Score descending, then rating, then enrollment, then catalog order
fn compare(a: &RankedResult<'_>, b: &RankedResult<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.path.rating().total_cmp(&a.path.rating()))
        .then_with(|| b.path.enrolled().cmp(&a.path.enrolled()))
        .then_with(|| a.position.cmp(&b.position))
}

/// Rank with the default policy
pub fn rank<'a>(profile: &LearnerProfile, catalog: &'a PathCatalog) -> Vec<RankedResult<'a>> {
    Selector::default().rank(profile, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Difficulty;
    use crate::profile::{Domain, ProfileBuilder, RawSelections};

    fn profile(domain: &str, targets: &[&str], hours: i64) -> LearnerProfile {
        ProfileBuilder::default()
            .build(&RawSelections {
                domain: domain.to_string(),
                target_skills: targets.iter().map(|t| t.to_string()).collect(),
                pace: Some("Moderate".to_string()),
                weekly_hours: hours,
                ..Default::default()
            })
            .unwrap()
    }

    #[allow(clippy::too_many_arguments)]
    fn path(
        id: &str,
        weeks: u32,
        rating: f64,
        enrolled: u64,
        domains: Vec<Domain>,
        difficulty: Difficulty,
        targets: Vec<TargetSkill>,
    ) -> LearningPath {
        LearningPath::new(id, vec!["Course".to_string()], weeks, rating, enrolled, domains, difficulty, targets)
            .unwrap()
    }

    fn dashboard_catalog() -> PathCatalog {
        PathCatalog::from_paths(vec![
            path(
                "Data Science Track",
                12,
                4.8,
                12500,
                vec![Domain::DataScience],
                Difficulty::Intermediate,
                vec![TargetSkill::AiMl, TargetSkill::DataEngineering],
            ),
            path(
                "ML Engineering Track",
                16,
                4.9,
                15000,
                vec![Domain::MachineLearning],
                Difficulty::Advanced,
                vec![TargetSkill::AiMl],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_dashboard_scenario() {
        let catalog = dashboard_catalog();
        let results = rank(&profile("Data Science", &["AI/ML"], 10), &catalog);

        let ids: Vec<&str> = results.iter().map(|r| r.path.id()).collect();
        assert_eq!(ids, vec!["Data Science Track", "ML Engineering Track"]);

        // 0.25 * (1.0 + 1.0 + 0.96 + 1.0)
        assert!((results[0].score - 0.99).abs() < 1e-9, "score: {}", results[0].score);
        // 0.25 * (1.0 + 0.5 + 0.98 + 1.0)
        assert!((results[1].score - 0.87).abs() < 1e-9, "score: {}", results[1].score);

        assert_eq!(results[0].matched_skills, vec![TargetSkill::AiMl]);
        assert!(results[0].unmatched_skills.is_empty());
        assert_eq!(results[1].breakdown.domain_match, IMPLIED_DOMAIN_MATCH);
    }

    #[test]
    fn test_unrelated_domains_filtered() {
        let mut catalog = dashboard_catalog();
        catalog
            .register(path("Web", 8, 5.0, 1, vec![Domain::WebDevelopment], Difficulty::Beginner, vec![]))
            .unwrap();

        let results = rank(&profile("Data Science", &[], 10), &catalog);
        let ids: Vec<&str> = results.iter().map(|r| r.path.id()).collect();
        assert_eq!(ids, vec!["Data Science Track"]);
        assert_eq!(results[0].breakdown.skill_overlap, 0.0);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let catalog = PathCatalog::new();
        assert!(rank(&profile("DevOps", &["DevOps"], 10), &catalog).is_empty());
    }

    #[test]
    fn test_no_candidates_yields_empty_result() {
        let catalog = dashboard_catalog();
        assert!(rank(&profile("Web Development", &["Web Development"], 10), &catalog).is_empty());
    }

    #[test]
    fn test_tie_breaks() {
        let same = |id: &str, rating: f64, enrolled: u64| {
            path(id, 8, rating, enrolled, vec![Domain::DevOps], Difficulty::Intermediate, vec![])
        };
        // Equal score needs equal rating, so rating ties fall through to enrollment
        let catalog = PathCatalog::from_paths(vec![
            same("first", 4.0, 100),
            same("popular", 4.0, 900),
            same("second", 4.0, 100),
        ])
        .unwrap();

        let results = rank(&profile("DevOps", &[], 8), &catalog);
        let ids: Vec<&str> = results.iter().map(|r| r.path.id()).collect();
        assert_eq!(ids, vec!["popular", "first", "second"]);
        assert_eq!(results[1].catalog_position(), 0);
    }

    #[test]
    fn test_rating_breaks_ties_when_rating_is_unweighted() {
        let config = RankingConfig {
            weights: RankingWeights { rating: 0.0, ..RankingWeights::default() },
            ..RankingConfig::default()
        };
        let catalog = PathCatalog::from_paths(vec![
            path("low", 8, 3.0, 5000, vec![Domain::DevOps], Difficulty::Intermediate, vec![]),
            path("high", 8, 4.5, 10, vec![Domain::DevOps], Difficulty::Intermediate, vec![]),
        ])
        .unwrap();

        let results = Selector::new(config).unwrap().rank(&profile("DevOps", &[], 8), &catalog);
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[0].path.id(), "high");
    }

    #[test]
    fn test_max_results_and_min_score() {
        let catalog = dashboard_catalog();
        let learner = profile("Data Science", &["AI/ML"], 10);

        let limited = Selector::new(RankingConfig { max_results: Some(1), ..RankingConfig::default() }).unwrap();
        let results = limited.rank(&learner, &catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path.id(), "Data Science Track");

        let strict = Selector::new(RankingConfig { min_score: 0.9, ..RankingConfig::default() }).unwrap();
        assert_eq!(strict.rank(&learner, &catalog).len(), 1);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let catalog = dashboard_catalog();
        let learner = profile("Machine Learning", &["AI/ML", "DevOps"], 20);
        let selector = Selector::default();

        let first: Vec<(String, f64)> =
            selector.rank(&learner, &catalog).iter().map(|r| (r.path.id().to_string(), r.score)).collect();
        let second: Vec<(String, f64)> =
            selector.rank(&learner, &catalog).iter().map(|r| (r.path.id().to_string(), r.score)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_selector_rejects_invalid_config() {
        let cases = [
            RankingConfig { pace_decay: -2.0, ..RankingConfig::default() },
            RankingConfig { pace_decay: 0.0, ..RankingConfig::default() },
            RankingConfig { pace_tolerance: f64::NAN, ..RankingConfig::default() },
            RankingConfig {
                weights: RankingWeights { rating: -0.5, ..RankingWeights::default() },
                ..RankingConfig::default()
            },
            RankingConfig {
                difficulty_hours: DifficultyHours { advanced: 0.0, ..DifficultyHours::default() },
                ..RankingConfig::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(Selector::new(config.clone()), Err(ConfigError::InvalidValue { .. })),
                "should reject: {:?}",
                config
            );
        }
    }

    #[test]
    fn test_pace_mismatch_stays_within_unit_range() {
        let catalog = PathCatalog::from_paths(vec![path(
            "Kubernetes",
            10,
            4.5,
            100,
            vec![Domain::DevOps],
            Difficulty::Advanced,
            vec![],
        )])
        .unwrap();
        let results = Selector::default().rank(&profile("DevOps", &[], 2), &catalog);

        let fit = results[0].breakdown.pace_fit;
        assert!(fit > 0.0 && fit < 1.0, "pace fit: {}", fit);
        assert!(results[0].score <= 1.0, "score: {}", results[0].score);
    }
}
