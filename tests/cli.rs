//! Integration tests for the pathwise binary
//!
//! Runs the built binary end to end against the built-in catalog and
//! against temporary seed and settings files.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run pathwise and return (success, stdout, stderr)
fn run_pathwise(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pathwise"))
        .args(args)
        .env_remove("RUST_LOG")
        .current_dir(std::env::temp_dir())
        .output()
        .expect("Failed to execute pathwise");

    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path.to_str().expect("temp path is utf-8").to_string()
}

const TWO_TRACKS: &str = r#"
[[paths]]
id = "Data Science Track"
courses = ["Advanced Python Programming", "Statistical Learning", "Machine Learning Fundamentals"]
duration = "12 weeks"
rating = 4.8
enrolled = 12500
domains = ["Data Science"]
difficulty = "Intermediate"
target_skills = ["AI/ML"]

[[paths]]
id = "ML Engineering Track"
courses = ["Deep Learning Specialization", "MLOps Fundamentals", "Production ML Systems"]
duration = "16 weeks"
rating = 4.9
enrolled = 15000
domains = ["Machine Learning"]
difficulty = "Advanced"
target_skills = ["AI/ML"]
"#;

#[test]
fn test_version() {
    let (success, stdout, _) = run_pathwise(&["--version"]);
    assert!(success, "pathwise --version should succeed");
    assert!(stdout.contains("pathwise"));
}

#[test]
fn test_options() {
    let (success, stdout, _) = run_pathwise(&["options"]);
    assert!(success);
    assert!(stdout.contains("Machine Learning: Scikit-learn, TensorFlow, PyTorch"));
    assert!(stdout.contains("Study pace: Light, Moderate, Intensive"));
}

#[test]
fn test_recommend_with_builtin_catalog() {
    let (success, stdout, stderr) = run_pathwise(&[
        "recommend",
        "--domain", "Data Science",
        "--skill", "Python",
        "--target", "AI/ML",
        "--pace", "Moderate",
        "--hours", "10",
    ]);
    assert!(success, "recommend failed: {}", stderr);
    assert!(stdout.contains("Data Science Track"));
    assert!(stdout.contains("ML Engineering Track"));
}

#[test]
fn test_recommend_json_order() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let seed = write_file(temp.path(), "seed.toml", TWO_TRACKS);

    let (success, stdout, stderr) = run_pathwise(&[
        "--catalog", &seed,
        "recommend",
        "--domain", "Data Science",
        "--target", "AI/ML",
        "--hours", "10",
        "--json",
    ]);
    assert!(success, "recommend failed: {}", stderr);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Output should be valid JSON");
    let results = value["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["path"]["id"], "Data Science Track");
    assert_eq!(results[1]["path"]["id"], "ML Engineering Track");
    assert!(results[0]["score"].as_f64().unwrap() >= results[1]["score"].as_f64().unwrap());
    assert_eq!(value["profile"]["domain"], "Data Science");
}

#[test]
fn test_recommend_limit() {
    let (success, stdout, _) = run_pathwise(&[
        "recommend", "--domain", "DevOps", "--target", "DevOps", "--limit", "1", "--json",
    ]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 1);
}

#[test]
fn test_invalid_skill_fails() {
    let (success, _, stderr) = run_pathwise(&[
        "recommend", "--domain", "Data Science", "--skill", "COBOL",
    ]);
    assert!(!success, "COBOL should be rejected for Data Science");
    assert!(stderr.contains("COBOL"), "stderr: {}", stderr);
}

#[test]
fn test_hours_out_of_range_fails() {
    for hours in ["1", "41"] {
        let (success, _, stderr) = run_pathwise(&["recommend", "--domain", "DevOps", "--hours", hours]);
        assert!(!success, "{} hours should be rejected", hours);
        assert!(stderr.contains("between 2 and 40"), "stderr: {}", stderr);
    }
    for hours in ["2", "40"] {
        let (success, _, stderr) = run_pathwise(&["recommend", "--domain", "DevOps", "--hours", hours]);
        assert!(success, "{} hours should be accepted: {}", hours, stderr);
    }
}

#[test]
fn test_empty_catalog() {
    let temp = TempDir::new().unwrap();
    let seed = write_file(temp.path(), "empty.toml", "");

    let (success, stdout, _) = run_pathwise(&["--catalog", &seed, "recommend", "--domain", "DevOps"]);
    assert!(success);
    assert!(stdout.contains("No learning paths"));

    let (success, stdout, _) = run_pathwise(&["--catalog", &seed, "analytics", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["by_difficulty"]["Beginner"], 0);
    assert_eq!(value["by_domain"]["DevOps"], 0);
    assert_eq!(value["metrics"]["total_paths"], 0);
}

#[test]
fn test_strict_analytics_setting() {
    let temp = TempDir::new().unwrap();
    let seed = write_file(temp.path(), "empty.toml", "");
    let settings = write_file(temp.path(), "config.toml", "[analytics]\nrequire_non_empty = true\n");

    let (success, _, stderr) = run_pathwise(&["--catalog", &seed, "--config", &settings, "analytics"]);
    assert!(!success);
    assert!(stderr.contains("empty catalog"), "stderr: {}", stderr);
}

#[test]
fn test_duplicate_ids_abort() {
    let temp = TempDir::new().unwrap();
    let doubled = format!("{}\n{}", TWO_TRACKS, TWO_TRACKS.replace("ML Engineering Track", "Other"));
    let seed = write_file(temp.path(), "dup.toml", &doubled);

    let (success, _, stderr) = run_pathwise(&["--catalog", &seed, "catalog"]);
    assert!(!success);
    assert!(stderr.contains("duplicate learning path id"), "stderr: {}", stderr);
}

#[test]
fn test_catalog_by_domain() {
    let (success, stdout, _) = run_pathwise(&["catalog", "--domain", "Web Dev", "--json"]);
    assert!(success);
    let paths: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let paths = paths.as_array().unwrap();
    assert!(!paths.is_empty());
    for path in paths {
        let domains = path["domains"].as_array().unwrap();
        assert!(domains.iter().any(|d| d == "Web Development"));
    }
}
