//! Catalog analytics
//!
//! Derives the dashboard's chart data from the catalog on demand. Every
//! difficulty level and every domain is always present in a summary, so an
//! empty catalog produces all-zero counts rather than missing keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::{Difficulty, PathCatalog};
use crate::error::AnalyticsError;
use crate::profile::Domain;

/// Aggregator policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Treat an empty catalog as an error instead of an all-zero summary
    pub require_non_empty: bool,
}

/// Path counts per difficulty and per primary domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSummary {
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub by_domain: BTreeMap<Domain, usize>,
}

impl AnalyticsSummary {
    fn zeroed() -> Self {
        Self {
            by_difficulty: Difficulty::ALL.into_iter().map(|d| (d, 0)).collect(),
            by_domain: Domain::ALL.into_iter().map(|d| (d, 0)).collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.by_difficulty.values().sum()
    }

    /// Bar chart series: (level, count) from easiest to hardest
    pub fn difficulty_series(&self) -> Vec<(&'static str, usize)> {
        self.by_difficulty.iter().map(|(d, &count)| (d.as_str(), count)).collect()
    }

    /// Donut chart series: (domain, count) using the compact chart labels
    pub fn domain_series(&self) -> Vec<(&'static str, usize)> {
        self.by_domain.iter().map(|(d, &count)| (d.short_label(), count)).collect()
    }
}

/// Headline figures shown under the recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_paths: usize,
    pub total_learners: u64,
    /// Enrollment-weighted mean rating; `None` with no enrollments
    pub average_rating: Option<f64>,
}

/// Computes summaries over a catalog
#[derive(Debug, Clone, Default)]
pub struct AnalyticsAggregator {
    config: AnalyticsConfig,
}

impl AnalyticsAggregator {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Count paths per difficulty and per primary domain
    pub fn summarize(&self, catalog: &PathCatalog) -> Result<AnalyticsSummary, AnalyticsError> {
        if catalog.is_empty() && self.config.require_non_empty {
            return Err(AnalyticsError::EmptyCatalog);
        }

        let summary = summarize(catalog);
        debug!("Summarized {} paths", summary.total());
        Ok(summary)
    }

    pub fn dashboard_metrics(&self, catalog: &PathCatalog) -> DashboardMetrics {
        // Saturating; the average divides by the float sum instead
        let total_learners = catalog
            .all()
            .iter()
            .fold(0u64, |total, p| total.saturating_add(p.enrolled()));
        let (weighted, learners) = catalog.all().iter().fold((0.0_f64, 0.0_f64), |(w, n), p| {
            let enrolled = p.enrolled() as f64;
            (w + p.rating() * enrolled, n + enrolled)
        });

        DashboardMetrics {
            total_paths: catalog.len(),
            total_learners,
            average_rating: (total_learners > 0).then(|| weighted / learners),
        }
    }
}

/// Summarize with the default policy; never fails
pub fn summarize(catalog: &PathCatalog) -> AnalyticsSummary {
    let mut summary = AnalyticsSummary::zeroed();
    for path in catalog.all() {
        *summary.by_difficulty.entry(path.difficulty()).or_insert(0) += 1;
        *summary.by_domain.entry(path.primary_domain()).or_insert(0) += 1;
    }
    summary
}
