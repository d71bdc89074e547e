// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{Assessment, AssessmentCategory, FocusArea, Rating, RecommendedAction};

pub use crate::errors::{Error, IssueSeverity, Result, ValidationIssue};

pub use crate::scoring::{
    action_score, category_score, focus_area_score, overall_score, stage, ActionScore,
    CategoryScore, FocusAreaScore, MaturityReport, MaturityScore, MaturityStage,
    StageDistribution,
};

pub use crate::io::writers::{create_writer, OutputFormat, OutputWriter, ReportOptions};

pub use crate::io::{load_assessment, parse_assessment, DocumentFormat, LoadOptions};
