use crate::config::MaturitymapConfig;
use crate::errors::ValidationIssue;
use crate::io::{inspect_file, Inspection, LoadOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

pub struct ValidateConfig {
    pub path: PathBuf,
    pub strict: bool,
}

pub fn validate_assessment(config: ValidateConfig, settings: &MaturitymapConfig) -> Result<()> {
    let options = LoadOptions {
        strict: config.strict || settings.strict_loading(),
    };
    let inspection = inspect_file(&config.path, options)
        .with_context(|| format!("Failed to read assessment {}", config.path.display()))?;

    print!("{}", render_summary(&config.path, &inspection));

    let error_count = inspection.errors().count();
    if error_count > 0 {
        anyhow::bail!(
            "{} is invalid: {} error(s) found",
            config.path.display(),
            error_count
        );
    }
    Ok(())
}

/// Pure function to format the validation outcome
pub fn render_summary(path: &std::path::Path, inspection: &Inspection) -> String {
    let mut out = String::new();
    let issues: Vec<&ValidationIssue> = inspection
        .errors()
        .chain(inspection.warnings())
        .collect();

    for issue in &issues {
        let label = if issue.is_error() {
            "error".red().bold()
        } else {
            "warning".yellow().bold()
        };
        out.push_str(&format!("{label}: {}: {}\n", issue.location, issue.message));
    }

    let assessment = &inspection.assessment;
    let verdict = if inspection.is_valid() {
        "OK".green().bold()
    } else {
        "INVALID".red().bold()
    };
    out.push_str(&format!(
        "{verdict} {}: {} categories, {} focus areas, {} actions ({} errors, {} warnings)\n",
        path.display(),
        assessment.categories.len(),
        assessment.focus_area_count(),
        assessment.action_count(),
        inspection.errors().count(),
        inspection.warnings().count()
    ));
    out
}
