//! Score term weights
//!
//! Loaded from `[ranking.weights]`; missing keys keep their defaults.

use serde::{Deserialize, Serialize};

/// Weight of each score term
///
/// Terms are each in 0.0..=1.0, so with weights summing to one the match
/// score stays in 0.0..=1.0 as well. Weights need not sum to one; they
/// must be non-negative and not all zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    pub skill_overlap: f64,
    pub domain_match: f64,
    pub rating: f64,
    pub pace_fit: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            skill_overlap: 0.25,
            domain_match: 0.25,
            rating: 0.25,
            pace_fit: 0.25,
        }
    }
}

impl RankingWeights {
    pub fn sum(&self) -> f64 {
        self.skill_overlap + self.domain_match + self.rating + self.pace_fit
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.skill_overlap, self.domain_match, self.rating, self.pace_fit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = RankingWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
        assert!(weights.as_array().iter().all(|&w| w == 0.25));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let weights: RankingWeights = toml::from_str("rating = 0.7").unwrap();
        assert_eq!(weights.rating, 0.7);
        assert_eq!(weights.pace_fit, 0.25);
    }
}
