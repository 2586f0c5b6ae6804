//! Catalog seed loading
//!
//! Seed files are structured records in TOML (`[[paths]]` tables) or JSON
//! (`{"paths": [...]}`). Every record is validated into a [`LearningPath`]
//! and registered in file order, so a duplicate id fails the whole load.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use super::{Difficulty, LearningPath, PathCatalog};
use crate::error::CatalogError;
use crate::profile::{Domain, TargetSkill};

/// Seed shipped with the binary
const DEFAULT_SEED: &str = include_str!("../../data/catalog.toml");

/// Supported seed encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Toml,
    Json,
}

impl SeedFormat {
    /// Pick a format from the file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SeedFormat::Json,
            _ => SeedFormat::Toml,
        }
    }
}

/// Duration as written in a seed: `12` or `"12 weeks"`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DurationField {
    Weeks(u32),
    Text(String),
}

impl DurationField {
    fn weeks(&self) -> Option<u32> {
        match self {
            DurationField::Weeks(weeks) => Some(*weeks),
            DurationField::Text(text) => {
                let mut parts = text.split_whitespace();
                let weeks = parts.next()?.parse().ok()?;
                match parts.next() {
                    None => Some(weeks),
                    Some(unit) if unit.eq_ignore_ascii_case("weeks") || unit.eq_ignore_ascii_case("week") => {
                        parts.next().is_none().then_some(weeks)
                    }
                    Some(_) => None,
                }
            }
        }
    }
}

/// A learning path record as it appears in a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct PathRecord {
    id: String,
    courses: Vec<String>,
    #[serde(alias = "duration_weeks")]
    duration: DurationField,
    rating: f64,
    #[serde(default)]
    enrolled: u64,
    domains: Vec<Domain>,
    difficulty: Difficulty,
    #[serde(default)]
    target_skills: Vec<TargetSkill>,
}

impl TryFrom<PathRecord> for LearningPath {
    type Error = CatalogError;

    fn try_from(record: PathRecord) -> Result<Self, Self::Error> {
        let duration_weeks = record.duration.weeks().ok_or_else(|| CatalogError::InvalidPath {
            id: record.id.clone(),
            reason: format!("unreadable duration: {:?}", record.duration),
        })?;

        LearningPath::new(
            record.id,
            record.courses,
            duration_weeks,
            record.rating,
            record.enrolled,
            record.domains,
            record.difficulty,
            record.target_skills,
        )
    }
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    paths: Vec<LearningPath>,
}

/// Parse seed text into a catalog
pub fn parse_catalog(content: &str, format: SeedFormat) -> Result<PathCatalog, CatalogError> {
    let seed: SeedFile = match format {
        SeedFormat::Toml => toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?,
        SeedFormat::Json => serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?,
    };
    debug!("Parsed {} path records", seed.paths.len());
    PathCatalog::from_paths(seed.paths)
}

/// Load a catalog from a seed file
pub fn load_catalog(path: &Path) -> Result<PathCatalog, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&content, SeedFormat::from_path(path))?;
    info!("Loaded {} learning paths from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// The built-in catalog
pub fn default_catalog() -> Result<PathCatalog, CatalogError> {
    parse_catalog(DEFAULT_SEED, SeedFormat::Toml)
}
