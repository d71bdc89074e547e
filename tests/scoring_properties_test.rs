//! Property tests for the scoring engine.

use maturitymap::scoring::{
    action_score, category_score, focus_area_score, overall_score, MaturityScore, MaturityStage,
};
use maturitymap::{AssessmentCategory, FocusArea, Rating, RecommendedAction};
use proptest::prelude::*;

fn rating() -> impl Strategy<Value = Rating> {
    prop_oneof![Just(Rating::Low), Just(Rating::Medium), Just(Rating::High)]
}

fn action() -> impl Strategy<Value = RecommendedAction> {
    (0u32..1000, rating(), rating(), rating()).prop_map(|(n, priority, severity, complexity)| {
        RecommendedAction::new(format!("A-{n}"), "action", priority, severity, complexity)
    })
}

fn focus_area() -> impl Strategy<Value = FocusArea> {
    prop::collection::vec(action(), 1..8).prop_map(|actions| FocusArea::new("area").with_actions(actions))
}

proptest! {
    #[test]
    fn action_score_is_ten_minus_total_within_one_to_seven(action in action()) {
        let score = action_score(&action);
        prop_assert!((1..=7).contains(&score));
        prop_assert_eq!(score, 10 - action.total_points());
    }

    #[test]
    fn focus_area_score_stays_within_action_range(area in focus_area()) {
        let score = focus_area_score(&area);
        prop_assert!(score >= MaturityScore::from_tenths(10));
        prop_assert!(score <= MaturityScore::from_tenths(70));
    }

    #[test]
    fn focus_area_score_ignores_action_order(actions in prop::collection::vec(action(), 1..8)) {
        let forward = FocusArea::new("area").with_actions(actions.clone());
        let mut reversed_actions = actions;
        reversed_actions.reverse();
        let reversed = FocusArea::new("area").with_actions(reversed_actions);
        prop_assert_eq!(focus_area_score(&forward), focus_area_score(&reversed));
    }

    #[test]
    fn category_score_is_idempotent(areas in prop::collection::vec(focus_area(), 1..6)) {
        let category = AssessmentCategory::new("category", areas);
        prop_assert_eq!(category_score(&category), category_score(&category));
    }

    #[test]
    fn single_category_overall_equals_category_score(areas in prop::collection::vec(focus_area(), 1..6)) {
        let categories = vec![AssessmentCategory::new("category", areas)];
        prop_assert_eq!(overall_score(&categories), category_score(&categories[0]));
    }

    #[test]
    fn stage_is_monotonic_in_score(a in 0u16..=100, b in 0u16..=100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(MaturityStage::from_tenths(low) <= MaturityStage::from_tenths(high));
    }

    #[test]
    fn tenths_and_float_classification_agree(tenths in 0u16..=100) {
        let score = MaturityScore::from_tenths(tenths);
        prop_assert_eq!(score.stage(), MaturityStage::classify(score.value()));
    }
}

#[test]
fn empty_collections_score_the_sentinel() {
    assert_eq!(overall_score(&[]), MaturityScore::PERFECT);
    assert_eq!(focus_area_score(&FocusArea::new("empty")), MaturityScore::PERFECT);
    assert_eq!(
        category_score(&AssessmentCategory::new("empty", vec![])),
        MaturityScore::PERFECT
    );
    assert_eq!(MaturityScore::PERFECT.stage(), MaturityStage::Optimized);
}
