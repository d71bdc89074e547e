//! Maturity scoring engine.
//!
//! Converts the three ratings of each recommended action into a maturity
//! score and aggregates upwards: action → focus area → category → overall.
//!
//! - Action: `max(10 - (priority + severity + complexity), 1)`, an integer
//!   in 1..=7 for valid ratings. No upper clamp is applied.
//! - Focus area, category, overall: unweighted mean of the level below,
//!   rounded half-up to one decimal. An empty collection scores exactly 10.
//!
//! A category is the mean of its focus-area means, not of its actions, so
//! every focus area weighs the same regardless of how many actions it holds.
//!
//! Action scores never exceed 7, which means the Managed band above 7.0 and
//! the whole Optimized band are reachable only through the empty-collection
//! sentinel. The formula is kept as is.
//!
//! All functions are pure and borrow their input.

pub mod report;
mod score;
mod stage;

pub use report::{ActionScore, CategoryScore, FocusAreaScore, MaturityReport, StageDistribution};
pub use score::MaturityScore;
pub use stage::MaturityStage;

use crate::core::{AssessmentCategory, FocusArea, RecommendedAction};

/// Highest score a rating total is subtracted from
const SCALE_CEILING: i16 = 10;
/// Lowest score an action can receive
const ACTION_FLOOR: i16 = 1;

/// Integer maturity score of a single action
pub fn action_score(action: &RecommendedAction) -> u8 {
    let maturity = SCALE_CEILING - i16::from(action.total_points());
    // total_points is at most 9, so this stays in 1..=7
    maturity.max(ACTION_FLOOR) as u8
}

pub fn focus_area_score(focus_area: &FocusArea) -> MaturityScore {
    MaturityScore::mean(
        focus_area
            .recommended_actions
            .iter()
            .map(|action| MaturityScore::from_points(action_score(action))),
    )
    .unwrap_or(MaturityScore::PERFECT)
}

pub fn category_score(category: &AssessmentCategory) -> MaturityScore {
    MaturityScore::mean(category.focus_areas.iter().map(focus_area_score))
        .unwrap_or(MaturityScore::PERFECT)
}

pub fn overall_score(categories: &[AssessmentCategory]) -> MaturityScore {
    MaturityScore::mean(categories.iter().map(category_score)).unwrap_or(MaturityScore::PERFECT)
}

/// Stage for an arbitrary score value
pub fn stage(score: f64) -> MaturityStage {
    MaturityStage::classify(score)
}
