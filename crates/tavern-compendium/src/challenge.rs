//! Challenge ratings.
//!
//! Ratings below 1 are the fractions 1/8, 1/4 and 1/2. They are stored in
//! eighths so ratings compare and sort as integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CompendiumError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChallengeRating(u16);

impl ChallengeRating {
    pub const ZERO: Self = Self(0);

    /// A whole-number rating.
    #[must_use]
    pub const fn whole(cr: u16) -> Self {
        Self(cr.saturating_mul(8))
    }

    #[must_use]
    pub const fn eighths(self) -> u16 {
        self.0
    }
}

impl FromStr for ChallengeRating {
    type Err = CompendiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CompendiumError::InvalidChallengeRating(s.to_string());
        match s.trim() {
            "1/8" => Ok(Self(1)),
            "1/4" => Ok(Self(2)),
            "1/2" => Ok(Self(4)),
            whole => whole
                .parse::<u16>()
                .ok()
                .and_then(|cr| cr.checked_mul(8))
                .map(Self)
                .ok_or_else(invalid),
        }
    }
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("1/8"),
            2 => f.write_str("1/4"),
            4 => f.write_str("1/2"),
            n => write!(f, "{}", n / 8),
        }
    }
}

impl Serialize for ChallengeRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChallengeRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Whole(u16),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Whole(cr) => cr
                .checked_mul(8)
                .map(Self)
                .ok_or_else(|| serde::de::Error::custom(format!("challenge rating {cr} too large"))),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_and_whole_numbers() {
        let parsed: Vec<ChallengeRating> = ["0", "1/8", "1/4", "1/2", "1", "21"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let mut sorted = parsed.clone();
        sorted.sort();
        assert_eq!(parsed, sorted);
        assert_eq!(parsed[2].to_string(), "1/4");
        assert_eq!(parsed[5], ChallengeRating::whole(21));
    }

    #[test]
    fn rejects_other_fractions() {
        assert!("1/3".parse::<ChallengeRating>().is_err());
        assert!("-1".parse::<ChallengeRating>().is_err());
        assert!("".parse::<ChallengeRating>().is_err());
    }

    #[test]
    fn json_accepts_numbers_and_strings() {
        let from_number: ChallengeRating = serde_json::from_str("5").unwrap();
        let from_text: ChallengeRating = serde_json::from_str("\"1/2\"").unwrap();
        assert_eq!(from_number, ChallengeRating::whole(5));
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"1/2\"");
    }
}
