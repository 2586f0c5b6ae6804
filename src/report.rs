//! Plain-text rendering of results for the terminal

use std::fmt::{self, Write};

use crate::analytics::{AnalyticsSummary, DashboardMetrics};
use crate::catalog::LearningPath;
use crate::profile::{CareerGoal, Domain, ExperienceBucket, LearningStyle, StudyPace, TargetSkill};
use crate::ranking::RankedResult;

/// Format an integer with thousands separators: 12500 -> "12,500"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn write_path(out: &mut String, path: &LearningPath) -> fmt::Result {
    writeln!(out, "📚 {}", path.id())?;
    writeln!(
        out,
        "   Duration: {} weeks | {} | Rating: ⭐ {:.1} | Enrolled: 👥 {}",
        path.duration_weeks(),
        path.difficulty(),
        path.rating(),
        group_thousands(path.enrolled())
    )?;
    let domains: Vec<&str> = path.domains().iter().map(|d| d.as_str()).collect();
    writeln!(out, "   Domains: {}", domains.join(", "))?;
    writeln!(out, "   Courses:")?;
    for course in path.courses() {
        writeln!(out, "     - {}", course)?;
    }
    Ok(())
}

fn join_skills(skills: &[TargetSkill]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
    }
}

/// Render ranked results as a list of cards
pub fn format_recommendations(results: &[RankedResult<'_>]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if results.is_empty() {
        out.push_str("No learning paths match your selections.\n");
        return Ok(out);
    }

    writeln!(out, "Recommended Learning Paths")?;
    writeln!(out, "==========================")?;
    for (rank, result) in results.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "#{} (match {:.0}%)", rank + 1, result.score * 100.0)?;
        write_path(&mut out, result.path)?;
        writeln!(out, "   Covers: {}", join_skills(&result.matched_skills))?;
        if !result.unmatched_skills.is_empty() {
            writeln!(out, "   Missing: {}", join_skills(&result.unmatched_skills))?;
        }
    }
    Ok(out)
}

/// Render the catalog in insertion order
pub fn format_catalog<'a>(paths: impl IntoIterator<Item = &'a LearningPath>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let mut count = 0;
    for path in paths {
        if count > 0 {
            writeln!(out)?;
        }
        write_path(&mut out, path)?;
        count += 1;
    }
    if count == 0 {
        out.push_str("Catalog is empty.\n");
    }
    Ok(out)
}

fn write_series(out: &mut String, series: &[(&str, usize)]) -> fmt::Result {
    let width = series.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let total: usize = series.iter().map(|(_, count)| count).sum();
    for (label, count) in series {
        let share = if total > 0 { *count as f64 * 100.0 / total as f64 } else { 0.0 };
        writeln!(out, "  {:<width$}  {:>4}  {:>5.1}%  {}", label, count, share, "█".repeat(*count))?;
    }
    Ok(())
}

/// Render chart series and headline figures
pub fn format_analytics(summary: &AnalyticsSummary, metrics: &DashboardMetrics) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Analytics")?;
    writeln!(out, "=========")?;
    writeln!(out)?;
    writeln!(out, "Course Distribution by Level")?;
    write_series(&mut out, &summary.difficulty_series())?;
    writeln!(out)?;
    writeln!(out, "Course Distribution by Domain")?;
    write_series(&mut out, &summary.domain_series())?;
    writeln!(out)?;
    writeln!(out, "Learning paths: {}", metrics.total_paths)?;
    writeln!(out, "Total learners: {}", group_thousands(metrics.total_learners))?;
    match metrics.average_rating {
        Some(rating) => writeln!(out, "Avg. rating:    {:.1}/5", rating)?,
        None => writeln!(out, "Avg. rating:    n/a")?,
    }
    Ok(out)
}

/// Render every selectable value
pub fn format_options() -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Domains and skills:")?;
    for domain in Domain::ALL {
        writeln!(out, "  {}: {}", domain, domain.vocabulary().join(", "))?;
    }
    let list = |labels: Vec<&str>| labels.join(", ");
    writeln!(out, "Experience: {}", list(ExperienceBucket::ALL.iter().map(|e| e.as_str()).collect()))?;
    writeln!(out, "Career goals: {}", list(CareerGoal::ALL.iter().map(|g| g.as_str()).collect()))?;
    writeln!(out, "Target skills: {}", list(TargetSkill::ALL.iter().map(|t| t.as_str()).collect()))?;
    writeln!(out, "Study pace: {}", list(StudyPace::ALL.iter().map(|p| p.as_str()).collect()))?;
    writeln!(out, "Learning styles: {}", list(LearningStyle::ALL.iter().map(|l| l.as_str()).collect()))?;
    Ok(out)
}
