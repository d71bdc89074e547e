//! Maturity stage classification.
//!
//! Five ordered, non-overlapping bands with inclusive upper boundaries.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityStage {
    /// Score at or below 2.9
    Initial,
    /// Above 2.9, at or below 4.9
    Developing,
    /// Above 4.9, at or below 6.9
    Defined,
    /// Above 6.9, at or below 8.9
    Managed,
    /// Above 8.9
    Optimized,
}

/// Inclusive upper bound of each stage, in ascending order
const STAGE_CEILINGS: [(f64, MaturityStage); 4] = [
    (2.9, MaturityStage::Initial),
    (4.9, MaturityStage::Developing),
    (6.9, MaturityStage::Defined),
    (8.9, MaturityStage::Managed),
];

/// Same ceilings in tenths, for exact scores
const STAGE_CEILINGS_TENTHS: [(u16, MaturityStage); 4] = [
    (29, MaturityStage::Initial),
    (49, MaturityStage::Developing),
    (69, MaturityStage::Defined),
    (89, MaturityStage::Managed),
];

impl MaturityStage {
    pub const ALL: [MaturityStage; 5] = [
        MaturityStage::Initial,
        MaturityStage::Developing,
        MaturityStage::Defined,
        MaturityStage::Managed,
        MaturityStage::Optimized,
    ];

    /// Classify an arbitrary score.
    ///
    /// `NaN` is not a score: it trips a debug assertion, and in release
    /// builds it fails every ceiling comparison and lands in `Optimized`.
    pub fn classify(score: f64) -> Self {
        debug_assert!(!score.is_nan(), "cannot classify a NaN maturity score");
        STAGE_CEILINGS
            .iter()
            .find(|(ceiling, _)| score <= *ceiling)
            .map(|(_, stage)| *stage)
            .unwrap_or(MaturityStage::Optimized)
    }

    pub fn from_tenths(tenths: u16) -> Self {
        STAGE_CEILINGS_TENTHS
            .iter()
            .find(|(ceiling, _)| tenths <= *ceiling)
            .map(|(_, stage)| *stage)
            .unwrap_or(MaturityStage::Optimized)
    }

    pub fn name(self) -> &'static str {
        match self {
            MaturityStage::Initial => "Initial",
            MaturityStage::Developing => "Developing",
            MaturityStage::Defined => "Defined",
            MaturityStage::Managed => "Managed",
            MaturityStage::Optimized => "Optimized",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MaturityStage::Initial => "Processes are ad-hoc, chaotic, and reactive.",
            MaturityStage::Developing => {
                "Some processes are defined but not consistently followed."
            }
            MaturityStage::Defined => "Processes are standardized, documented, and proactive.",
            MaturityStage::Managed => "Performance is measured and managed quantitatively.",
            MaturityStage::Optimized => {
                "Focused on continuous process improvement and optimization."
            }
        }
    }

    /// Display range of the band, e.g. `2.9 < score <= 4.9`
    pub fn range_label(self) -> &'static str {
        match self {
            MaturityStage::Initial => "score <= 2.9",
            MaturityStage::Developing => "2.9 < score <= 4.9",
            MaturityStage::Defined => "4.9 < score <= 6.9",
            MaturityStage::Managed => "6.9 < score <= 8.9",
            MaturityStage::Optimized => "score > 8.9",
        }
    }
}

impl fmt::Display for MaturityStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
