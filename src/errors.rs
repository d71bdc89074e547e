//! Error types for maturitymap operations.
//!
//! Scoring itself cannot fail once a document has been turned into the typed
//! assessment tree, so every variant here describes a problem at the loading
//! boundary: unreadable files, unparseable documents, ratings outside the
//! three recognized levels, or structurally incomplete trees.
//!
//! # Example
//!
//! ```rust
//! use maturitymap::errors::Error;
//!
//! let err = Error::invalid_rating("Critical");
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid rating 'Critical': expected one of High, Medium, Low"
//! );
//! ```

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for maturitymap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A rating field holds a value outside {High, Medium, Low}
    #[error("Invalid rating '{value}': expected one of High, Medium, Low")]
    InvalidRating { value: String },

    /// A child collection is missing or null under strict loading
    #[error("Malformed assessment at {location}: '{field}' is missing or null")]
    MalformedTree { location: String, field: &'static str },

    /// Accumulated document problems, reported together
    #[error("{}", format_issues(.0))]
    Validation(Vec<ValidationIssue>),

    /// Document format could not be determined from the file name
    #[error("Unsupported assessment format for {}: expected .json, .yaml, .yml or .toml", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// File system errors
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document deserialization errors
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid rating error for the offending text
    pub fn invalid_rating(value: impl Into<String>) -> Self {
        Self::InvalidRating {
            value: value.into(),
        }
    }

    /// Create a malformed tree error for a missing collection
    pub fn malformed_tree(location: impl Into<String>, field: &'static str) -> Self {
        Self::MalformedTree {
            location: location.into(),
            field,
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with path context
    pub fn parse(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Issues carried by a validation error, empty for every other variant
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Validation(issues) => issues,
            _ => &[],
        }
    }

    /// Whether the user can fix this by editing the assessment document
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidRating { .. }
                | Self::MalformedTree { .. }
                | Self::Validation(_)
                | Self::UnsupportedFormat { .. }
                | Self::Parse { .. }
        )
    }
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// How serious a validation finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Warning,
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single located finding about an assessment document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    /// Path into the tree, e.g. `CRM Setup / Duplicates / CRM-D-01`
    pub location: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    let errors: Vec<String> = issues
        .iter()
        .filter(|issue| issue.is_error())
        .map(|issue| format!("  {}: {}", issue.location, issue.message))
        .collect();
    format!(
        "Assessment has {} invalid entr{}:\n{}",
        errors.len(),
        if errors.len() == 1 { "y" } else { "ies" },
        errors.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_only_errors() {
        let err = Error::Validation(vec![
            ValidationIssue::error("A / B / X-01", "priority: Invalid rating 'Urgent'"),
            ValidationIssue::warning("A / C", "no recommended actions"),
        ]);
        let text = err.to_string();
        assert!(text.starts_with("Assessment has 1 invalid entry:"));
        assert!(text.contains("A / B / X-01"));
        assert!(!text.contains("A / C"));
    }

    #[test]
    fn issues_accessor_is_empty_for_other_variants() {
        let err = Error::Config("bad".into());
        assert!(err.issues().is_empty());
        assert!(!err.is_user_fixable());
    }

    #[test]
    fn invalid_rating_is_user_fixable() {
        assert!(Error::invalid_rating("Severe").is_user_fixable());
    }

    #[test]
    fn issue_display_includes_severity_and_location() {
        let issue = ValidationIssue::warning("Data Lists", "duplicate action id 'DL-01'");
        assert_eq!(
            issue.to_string(),
            "warning: Data Lists: duplicate action id 'DL-01'"
        );
    }
}
