//! Pace fit scoring
//!
//! Compares the hours a path demands with the hours a learner will put in
//! over the same number of weeks. Inside the tolerance band the fit is
//! perfect; past it the fit decays exponentially toward zero.

use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;
use crate::profile::StudyPace;

/// Assumed weekly study hours a path of each difficulty needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyHours {
    pub beginner: f64,
    pub intermediate: f64,
    pub advanced: f64,
}

impl Default for DifficultyHours {
    fn default() -> Self {
        Self {
            beginner: 5.0,
            intermediate: 8.0,
            advanced: 12.0,
        }
    }
}

impl DifficultyHours {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Beginner => self.beginner,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }
}

/// Tolerance band and decay rate for pace mismatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacePolicy {
    pub hours: DifficultyHours,
    /// Relative deviation accepted without penalty
    pub tolerance: f64,
    /// Exponential decay rate applied past the tolerance band
    pub decay: f64,
}

impl Default for PacePolicy {
    fn default() -> Self {
        Self {
            hours: DifficultyHours::default(),
            tolerance: 0.25,
            decay: 2.0,
        }
    }
}

impl PacePolicy {
    /// Fit in (0.0, 1.0] between a path's demand and the learner's budget
    pub fn fit(&self, duration_weeks: u32, difficulty: Difficulty, pace: StudyPace, weekly_hours: u32) -> f64 {
        let weeks = f64::from(duration_weeks);
        let required = weeks * self.hours.for_difficulty(difficulty);
        let available = weeks * f64::from(weekly_hours) * pace.multiplier();

        if available <= 0.0 {
            return 0.0;
        }

        let deviation = (required - available).abs() / available;
        if deviation <= self.tolerance {
            1.0
        } else {
            (-self.decay * (deviation - self.tolerance)).exp().min(1.0)
        }
    }
}
