//! Exact one-decimal maturity scores.
//!
//! Aggregated scores are stored as a whole number of tenths, so the
//! one-decimal rounding applied at every aggregation level is integer
//! arithmetic and reproducible on every platform.
//!
//! ```rust
//! use maturitymap::scoring::MaturityScore;
//!
//! let mean = MaturityScore::mean([
//!     MaturityScore::from_points(1),
//!     MaturityScore::from_points(2),
//! ])
//! .unwrap();
//! assert_eq!(mean.value(), 1.5);
//! assert_eq!(mean.to_string(), "1.5");
//! ```

use super::stage::MaturityStage;
use serde::{Serialize, Serializer};
use std::fmt;

/// Maturity score with one decimal of precision, held as tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaturityScore(u16);

impl MaturityScore {
    /// Sentinel for collections with nothing to improve
    pub const PERFECT: MaturityScore = MaturityScore(100);

    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    /// Whole-number score, e.g. a per-action score
    pub const fn from_points(points: u8) -> Self {
        Self(points as u16 * 10)
    }

    pub const fn tenths(self) -> u16 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    pub fn stage(self) -> MaturityStage {
        MaturityStage::from_tenths(self.0)
    }

    /// Unweighted mean rounded half-up to one decimal; `None` when empty
    pub fn mean<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = MaturityScore>,
    {
        let (sum, count) = scores
            .into_iter()
            .fold((0u64, 0u64), |(sum, count), score| {
                (sum + u64::from(score.0), count + 1)
            });
        if count == 0 {
            return None;
        }
        let rounded = (2 * sum + count) / (2 * count);
        Some(Self(rounded as u16))
    }
}

impl fmt::Display for MaturityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for MaturityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl From<MaturityScore> for f64 {
    fn from(score: MaturityScore) -> Self {
        score.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenths(values: &[u16]) -> Vec<MaturityScore> {
        values.iter().copied().map(MaturityScore::from_tenths).collect()
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(MaturityScore::mean(Vec::new()), None);
    }

    #[test]
    fn mean_rounds_half_up() {
        // 2.55 -> 2.6
        let mean = MaturityScore::mean(tenths(&[25, 26])).unwrap();
        assert_eq!(mean.tenths(), 26);
        // 4.45 -> 4.5
        let mean = MaturityScore::mean(tenths(&[44, 45])).unwrap();
        assert_eq!(mean.tenths(), 45);
    }

    #[test]
    fn mean_rounds_below_half_down() {
        // (1 + 1 + 2) / 3 = 1.333.. -> 1.3
        let scores = [1, 1, 2].map(MaturityScore::from_points);
        assert_eq!(MaturityScore::mean(scores).unwrap().tenths(), 13);
        // (1 + 2 + 2) / 3 = 1.666.. -> 1.7
        let scores = [1, 2, 2].map(MaturityScore::from_points);
        assert_eq!(MaturityScore::mean(scores).unwrap().tenths(), 17);
    }

    #[test]
    fn display_always_shows_one_decimal() {
        assert_eq!(MaturityScore::PERFECT.to_string(), "10.0");
        assert_eq!(MaturityScore::from_points(4).to_string(), "4.0");
        assert_eq!(MaturityScore::from_tenths(37).to_string(), "3.7");
    }

    #[test]
    fn value_matches_decimal_literal() {
        assert_eq!(MaturityScore::from_tenths(29).value(), 2.9);
        assert_eq!(MaturityScore::from_tenths(49).value(), 4.9);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&MaturityScore::from_tenths(32)).unwrap();
        assert_eq!(json, "3.2");
    }
}
