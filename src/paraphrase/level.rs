//! Difficulty levels for synonym selection.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ParrotError;

/// A named policy controlling how far from the most common synonym the
/// selector is permitted to draw.
///
/// - `Easy` always takes the most common candidate.
/// - `Medium` draws uniformly from candidates past the most common one.
/// - `Hard` draws uniformly from candidates past the two most common ones.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    /// Substitute the most common synonym.
    Easy,
    /// Substitute a less common synonym.
    Medium,
    /// Substitute an uncommon synonym.
    Hard,
}

impl DifficultyLevel {
    /// All levels, in ascending divergence order.
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hard,
    ];

    /// The index of the first candidate this level may draw from.
    pub fn first_eligible(self) -> usize {
        match self {
            DifficultyLevel::Easy => 0,
            DifficultyLevel::Medium => 1,
            DifficultyLevel::Hard => 2,
        }
    }

    /// The minimum candidate count required before this level substitutes
    /// at all.
    pub fn min_candidates(self) -> usize {
        match self {
            DifficultyLevel::Easy => 1,
            DifficultyLevel::Medium => 2,
            DifficultyLevel::Hard => 3,
        }
    }

    /// The level name as a lowercase string.
    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = ParrotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(DifficultyLevel::Easy),
            "medium" => Ok(DifficultyLevel::Medium),
            "hard" => Ok(DifficultyLevel::Hard),
            other => Err(ParrotError::invalid_argument(format!(
                "unknown difficulty level '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_bounds() {
        assert_eq!(DifficultyLevel::Easy.first_eligible(), 0);
        assert_eq!(DifficultyLevel::Medium.first_eligible(), 1);
        assert_eq!(DifficultyLevel::Hard.first_eligible(), 2);

        assert_eq!(DifficultyLevel::Easy.min_candidates(), 1);
        assert_eq!(DifficultyLevel::Medium.min_candidates(), 2);
        assert_eq!(DifficultyLevel::Hard.min_candidates(), 3);
    }

    #[test]
    fn test_display_and_parse() {
        for level in DifficultyLevel::ALL {
            assert_eq!(level.as_str().parse::<DifficultyLevel>().unwrap(), level);
        }
        assert_eq!(
            "HARD".parse::<DifficultyLevel>().unwrap(),
            DifficultyLevel::Hard
        );
        assert!("impossible".parse::<DifficultyLevel>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&DifficultyLevel::Medium).unwrap(),
            r#""medium""#
        );
        let parsed: DifficultyLevel = serde_json::from_str(r#""hard""#).unwrap();
        assert_eq!(parsed, DifficultyLevel::Hard);
    }
}
