use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-level ordinal rating carried by every recommended action.
///
/// Ordering follows business impact: `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::High, Rating::Medium, Rating::Low];

    /// Points on the fixed scale: High=3, Medium=2, Low=1
    pub const fn points(self) -> u8 {
        match self {
            Rating::High => 3,
            Rating::Medium => 2,
            Rating::Low => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Rating::High => "High",
            Rating::Medium => "Medium",
            Rating::Low => "Low",
        }
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Rating::High),
            "Medium" => Ok(Rating::Medium),
            "Low" => Ok(Rating::Low),
            other => Err(Error::invalid_rating(other)),
        }
    }
}

impl TryFrom<String> for Rating {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rating> for &'static str {
    fn from(rating: Rating) -> Self {
        rating.as_str()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_follow_fixed_scale() {
        assert_eq!(Rating::High.points(), 3);
        assert_eq!(Rating::Medium.points(), 2);
        assert_eq!(Rating::Low.points(), 1);
    }

    #[test]
    fn parses_canonical_names_only() {
        assert_eq!("High".parse::<Rating>().unwrap(), Rating::High);
        assert_eq!("Medium".parse::<Rating>().unwrap(), Rating::Medium);
        assert_eq!("Low".parse::<Rating>().unwrap(), Rating::Low);

        for bad in ["high", "HIGH", "Critical", "", " Low"] {
            let err = bad.parse::<Rating>().unwrap_err();
            assert!(matches!(err, Error::InvalidRating { ref value } if value == bad));
        }
    }

    #[test]
    fn ordering_matches_business_impact() {
        assert!(Rating::High > Rating::Medium);
        assert!(Rating::Medium > Rating::Low);
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&Rating::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
        let parsed: Rating = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, Rating::Low);
        assert!(serde_json::from_str::<Rating>("\"Severe\"").is_err());
    }
}
