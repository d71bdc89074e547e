//! Scores of the embedded Pipeline Creation Diagnostic.

use maturitymap::dataset::builtin_assessment;
use maturitymap::{MaturityReport, MaturityStage};
use pretty_assertions::assert_eq;

#[test]
fn category_scores_match_known_values() {
    let report = MaturityReport::build(&builtin_assessment().unwrap());

    let scores: Vec<(&str, String)> = report
        .categories
        .iter()
        .map(|c| (c.name.as_str(), c.score.to_string()))
        .collect();
    let expected = vec![
        ("ICP Targeting", "2.5"),
        ("Data Lists", "2.5"),
        ("CRM Setup", "3.0"),
        ("Other Systems", "2.0"),
        ("Reporting Structure", "3.7"),
        ("Sequence Effectiveness", "3.9"),
        ("Seller Execution", "3.4"),
        ("Capacity Modeling", "3.0"),
        ("Strategic Focuses", "2.7"),
        ("Training & Enablement", "4.0"),
        ("AI Use Cases", "4.0"),
    ];
    assert_eq!(
        scores,
        expected
            .into_iter()
            .map(|(name, score)| (name, score.to_string()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn overall_is_developing() {
    let report = MaturityReport::build(&builtin_assessment().unwrap());
    assert_eq!(report.overall.to_string(), "3.2");
    assert_eq!(report.overall_stage, MaturityStage::Developing);
    assert_eq!(report.stage_distribution.total(), 72);
    assert_eq!(report.actions.len(), 72);
}
