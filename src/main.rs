use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pathwise::analytics::AnalyticsAggregator;
use pathwise::catalog::{self, PathCatalog};
use pathwise::config::{self, Settings};
use pathwise::profile::{Domain, LearnerProfile, ProfileBuilder, RawSelections};
use pathwise::ranking::{RankedResult, Selector};
use pathwise::report;

/// pathwise - course recommendation from learner preferences
/// Ranks learning paths against a learner profile and summarizes the catalog
#[derive(Parser)]
#[command(name = "pathwise")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rank learning paths against learner preferences", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to .pathwise/config.toml here or in $HOME)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog seed file, TOML or JSON (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend learning paths for a learner profile
    Recommend {
        /// Primary domain, e.g. "Data Science"
        #[arg(long)]
        domain: String,
        /// Current skill within the domain (repeatable)
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Years of experience: 0-1, 1-3, 3-5, 5-10, 10+
        #[arg(long)]
        experience: Option<String>,
        /// Career objective (repeatable)
        #[arg(long = "goal")]
        goals: Vec<String>,
        /// Skill to acquire (repeatable)
        #[arg(long = "target")]
        targets: Vec<String>,
        /// Study pace: Light, Moderate, Intensive
        #[arg(long)]
        pace: Option<String>,
        /// Weekly time commitment in hours (2-40)
        #[arg(long, default_value = "10", allow_negative_numbers = true)]
        hours: i64,
        /// Preferred learning style (repeatable)
        #[arg(long = "style")]
        styles: Vec<String>,
        /// Show at most this many paths
        #[arg(long)]
        limit: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show course distribution charts and headline figures
    Analytics {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List learning paths in the catalog
    Catalog {
        /// Only paths covering this domain
        #[arg(long)]
        domain: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List every selectable value
    Options,
}

#[derive(Serialize)]
struct RecommendationOutput<'a> {
    profile: &'a LearnerProfile,
    results: &'a [RankedResult<'a>],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries results, possibly JSON
        .init();

    if let Commands::Options = cli.command {
        print!("{}", report::format_options()?);
        return Ok(());
    }

    let settings = load_settings(cli.config.as_deref())?;
    let catalog = load_catalog(cli.catalog.as_deref())?.into_shared();

    match cli.command {
        Commands::Recommend {
            domain,
            skills,
            experience,
            goals,
            targets,
            pace,
            hours,
            styles,
            limit,
            json,
        } => {
            let raw = RawSelections {
                domain,
                skills,
                experience,
                goals,
                target_skills: targets,
                pace,
                weekly_hours: hours,
                styles,
            };
            let profile = ProfileBuilder::new(settings.profile.clone())
                .build(&raw)
                .context("Invalid selections")?;

            let mut ranking = settings.ranking.clone();
            if limit.is_some() {
                ranking.max_results = limit;
            }
            let results = Selector::new(ranking)?.rank(&profile, &catalog);
            info!("Ranked {} of {} paths", results.len(), catalog.len());

            if json {
                let output = RecommendationOutput {
                    profile: &profile,
                    results: &results,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", report::format_recommendations(&results)?);
            }
        }
        Commands::Analytics { json } => {
            let aggregator = AnalyticsAggregator::new(settings.analytics.clone());
            let summary = aggregator.summarize(&catalog)?;
            let metrics = aggregator.dashboard_metrics(&catalog);

            if json {
                let output = serde_json::json!({
                    "by_difficulty": summary.by_difficulty,
                    "by_domain": summary.by_domain,
                    "metrics": metrics,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", report::format_analytics(&summary, &metrics)?);
            }
        }
        Commands::Catalog { domain, json } => {
            let paths = match domain {
                Some(label) => {
                    let domain = Domain::from_label(&label)
                        .ok_or_else(|| anyhow::anyhow!("Unknown domain: {}", label))?;
                    catalog.by_domain(domain)
                }
                None => catalog.all().iter().collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&paths)?);
            } else {
                print!("{}", report::format_catalog(paths)?);
            }
        }
        Commands::Options => {}
    }

    Ok(())
}

fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(anyhow::anyhow!("Settings file not found: {}", path.display()));
            }
            path.to_path_buf()
        }
        None => match config::find_settings_file() {
            Some(path) => path,
            None => {
                debug!("No settings file found, using defaults");
                return Ok(Settings::default());
            }
        },
    };

    info!("Loading settings from {}", path.display());
    config::load_settings(&path).with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn load_catalog(explicit: Option<&Path>) -> Result<PathCatalog> {
    match explicit {
        Some(path) => catalog::load_catalog(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            let catalog = catalog::default_catalog().context("Built-in catalog is invalid")?;
            debug!("Using built-in catalog with {} paths", catalog.len());
            Ok(catalog)
        }
    }
}
