//! Learning path catalog
//!
//! The catalog is static configuration: paths are registered once at
//! startup, then the catalog is frozen behind an `Arc` and shared read-only
//! with every display session. Insertion order is preserved and is the
//! final tie-breaker when ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::CatalogError;
use crate::profile::{Domain, TargetSkill};

pub mod seed;

pub use seed::{default_catalog, load_catalog, parse_catalog, SeedFormat};

/// Path difficulty, ordered from easiest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest rating a path can carry
pub const MAX_RATING: f64 = 5.0;

/// An offered learning path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "seed::PathRecord")]
pub struct LearningPath {
    id: String,
    courses: Vec<String>,
    duration_weeks: u32,
    rating: f64,
    enrolled: u64,
    domains: Vec<Domain>,
    difficulty: Difficulty,
    target_skills: Vec<TargetSkill>,
}

impl LearningPath {
    /// Create a validated path
    ///
    /// Ids and course lists must be non-empty, duration positive, the rating
    /// within 0.0..=5.0 and at least one domain listed. The first domain is
    /// the path's primary domain. Repeated target skills are dropped.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        courses: Vec<String>,
        duration_weeks: u32,
        rating: f64,
        enrolled: u64,
        domains: Vec<Domain>,
        difficulty: Difficulty,
        target_skills: Vec<TargetSkill>,
    ) -> Result<Self, CatalogError> {
        let id = id.into().trim().to_string();
        let invalid = |reason: &str| CatalogError::InvalidPath {
            id: id.clone(),
            reason: reason.to_string(),
        };

        if id.is_empty() {
            return Err(invalid("id cannot be empty"));
        }
        if courses.is_empty() {
            return Err(invalid("course list cannot be empty"));
        }
        if courses.iter().any(|c| c.trim().is_empty()) {
            return Err(invalid("course names cannot be blank"));
        }
        if duration_weeks == 0 {
            return Err(invalid("duration must be at least one week"));
        }
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(invalid("rating must be between 0.0 and 5.0"));
        }
        if domains.is_empty() {
            return Err(invalid("at least one domain is required"));
        }

        let mut targets = Vec::with_capacity(target_skills.len());
        for skill in target_skills {
            if !targets.contains(&skill) {
                targets.push(skill);
            }
        }

        Ok(Self {
            id,
            courses,
            duration_weeks,
            rating,
            enrolled,
            domains,
            difficulty,
            target_skills: targets,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn duration_weeks(&self) -> u32 {
        self.duration_weeks
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn enrolled(&self) -> u64 {
        self.enrolled
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// The domain a path is counted under in analytics
    pub fn primary_domain(&self) -> Domain {
        // non-empty by construction
        self.domains[0]
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn target_skills(&self) -> &[TargetSkill] {
        &self.target_skills
    }

    pub fn covers_domain(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }
}

/// Insertion-ordered registry of learning paths
#[derive(Debug, Clone, Default)]
pub struct PathCatalog {
    paths: Vec<LearningPath>,
    index: HashMap<String, usize>,
}

impl PathCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path during startup
    pub fn register(&mut self, path: LearningPath) -> Result<(), CatalogError> {
        if self.index.contains_key(path.id()) {
            return Err(CatalogError::DuplicateId(path.id().to_string()));
        }
        debug!("Registered path '{}' ({} courses)", path.id(), path.courses().len());
        self.index.insert(path.id().to_string(), self.paths.len());
        self.paths.push(path);
        Ok(())
    }

    /// Build a catalog from paths in order, failing on the first duplicate
    pub fn from_paths(paths: impl IntoIterator<Item = LearningPath>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for path in paths {
            catalog.register(path)?;
        }
        Ok(catalog)
    }

    /// Freeze the catalog for shared read-only access
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// All paths in insertion order
    pub fn all(&self) -> &[LearningPath] {
        &self.paths
    }

    /// Paths listing `domain`, in insertion order
    pub fn by_domain(&self, domain: Domain) -> Vec<&LearningPath> {
        self.paths.iter().filter(|p| p.covers_domain(domain)).collect()
    }

    pub fn get(&self, id: &str) -> Option<&LearningPath> {
        self.index.get(id).map(|&idx| &self.paths[idx])
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
