//! Error types for pathwise
//!
//! Every failure is synchronous and deterministic. Validation errors go
//! back to the caller for correction; catalog errors are fatal at startup.

use thiserror::Error;

/// Malformed learner selections rejected by the profile builder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("skill '{skill}' is not part of the {domain} vocabulary")]
    InvalidSkill { domain: String, skill: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("at least one {field} must be selected")]
    EmptySelection { field: &'static str },

    #[error("unknown {field}: '{value}'")]
    UnknownOption { field: &'static str, value: String },
}

/// Errors raised while building or loading the path catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate learning path id: {0}")]
    DuplicateId(String),

    #[error("invalid learning path '{id}': {reason}")]
    InvalidPath { id: String, reason: String },

    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the analytics aggregator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("cannot summarize an empty catalog")]
    EmptyCatalog,
}

/// Errors raised while loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid setting {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = ValidationError::InvalidSkill {
            domain: "Data Science".to_string(),
            skill: "COBOL".to_string(),
        };
        assert_eq!(err.to_string(), "skill 'COBOL' is not part of the Data Science vocabulary");

        let err = ValidationError::OutOfRange { field: "weekly hours", value: 41, min: 2, max: 40 };
        assert_eq!(err.to_string(), "weekly hours must be between 2 and 40, got 41");
    }

    #[test]
    fn test_duplicate_id_message() {
        let err = CatalogError::DuplicateId("Data Science Track".to_string());
        assert!(err.to_string().contains("Data Science Track"));
    }
}
