//! Loading assessments from JSON, YAML and TOML documents.

use maturitymap::io::{inspect_file, load_assessment, DocumentFormat, LoadOptions};
use maturitymap::{Error, MaturityReport, MaturityStage};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn report_for(path: &Path) -> MaturityReport {
    MaturityReport::build(&load_assessment(path, LoadOptions::default()).unwrap())
}

#[test]
fn every_format_yields_the_same_report() {
    let json = report_for(&fixture("sample.json"));
    assert_eq!(report_for(&fixture("sample.yaml")), json);
    assert_eq!(report_for(&fixture("sample.toml")), json);
}

#[test]
fn sample_report_scores() {
    let report = report_for(&fixture("sample.json"));

    assert_eq!(report.name.as_deref(), Some("Sample Diagnostic"));
    // ICP Targeting: focus areas 4.5 and 4.0 average to 4.25, rounded half-up
    assert_eq!(report.category("ICP Targeting").unwrap().score.to_string(), "4.3");
    assert_eq!(report.category("CRM Setup").unwrap().score.to_string(), "4.0");
    assert_eq!(report.overall.to_string(), "4.2");
    assert_eq!(report.overall_stage, MaturityStage::Developing);
    assert_eq!(report.stage_distribution.count(MaturityStage::Developing), 3);

    let ranked: Vec<&str> = report.actions.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ranked, vec!["ICP-AA-01", "ICP-TD-01", "CRM-DH-01", "ICP-AA-02"]);
}

#[test]
fn invalid_document_reports_every_problem() {
    let err = load_assessment(&fixture("invalid.json"), LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "got {err:?}");
    let issues = err.issues();

    let errors: Vec<String> = issues
        .iter()
        .filter(|issue| issue.is_error())
        .map(|issue| issue.to_string())
        .collect();
    assert_eq!(errors.len(), 3);
    assert!(errors[0].contains("SE-CQ-01") && errors[0].contains("'high'"));
    assert!(errors[1].contains("SE-CQ-02") && errors[1].contains("'Critical'"));
    assert!(errors[2].contains("action #3"));
    assert!(issues
        .iter()
        .any(|issue| !issue.is_error() && issue.location == "Capacity Modeling"));
}

#[test]
fn strict_loading_rejects_null_collections() {
    let err = load_assessment(&fixture("invalid.json"), LoadOptions::strict()).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedTree { ref location, field: "focusAreas" } if location == "Capacity Modeling"
    ));

    let inspection = inspect_file(&fixture("invalid.json"), LoadOptions::strict()).unwrap();
    assert_eq!(inspection.errors().count(), 4);
}

#[test]
fn unknown_extension_is_unsupported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("assessment.xml");
    std::fs::write(&path, "<assessment/>").unwrap();

    assert!(DocumentFormat::from_path(&path).is_none());
    assert!(matches!(
        load_assessment(&path, LoadOptions::default()),
        Err(Error::UnsupportedFormat { .. })
    ));
}

#[test]
fn syntax_errors_carry_the_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yaml");
    std::fs::write(&path, "categories: [\n").unwrap();

    let err = load_assessment(&path, LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("broken.yaml"));
}
