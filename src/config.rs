//! Settings for pathwise
//!
//! All tunable policy lives in one TOML file. Every field has a default,
//! so an absent file or a partial one is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::analytics::AnalyticsConfig;
use crate::error::ConfigError;
use crate::profile::ProfilePolicy;
use crate::ranking::RankingConfig;

/// Directory holding pathwise settings
pub const CONFIG_DIR: &str = ".pathwise";

/// Settings file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Complete settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: ProfilePolicy,
    pub ranking: RankingConfig,
    pub analytics: AnalyticsConfig,
}

impl Settings {
    /// Check value ranges the type system cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ranking.validate()
    }
}

/// Parse and validate settings text
pub fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from file, falling back to defaults when it does not exist
pub fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
    if !config_path.exists() {
        debug!("No settings at {}, using defaults", config_path.display());
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(config_path)?;
    parse_settings(&content)
}

/// Locate the settings file
///
/// Checks `.pathwise/config.toml` in the current directory first, then in
/// the home directory. Returns `None` if neither exists.
pub fn find_settings_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok();
    find_settings_in(cwd.as_deref(), dirs::home_dir().as_deref())
}

fn find_settings_in(project_dir: Option<&Path>, home_dir: Option<&Path>) -> Option<PathBuf> {
    [project_dir, home_dir]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .find(|path| path.exists())
}
