//! The fixed expense category set.
//!
//! Defined once and consumed by both input validation and presentation so
//! the two can never drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An expense category.
///
/// Serializes to the exact display labels stored in the database and shown
/// to users (e.g. `"Food & Dining"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Food & Dining.
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    /// Transportation.
    Transportation,
    /// Housing.
    Housing,
    /// Utilities.
    Utilities,
    /// Insurance.
    Insurance,
    /// Healthcare.
    Healthcare,
    /// Entertainment.
    Entertainment,
    /// Shopping.
    Shopping,
    /// Education.
    Education,
    /// Anything else.
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 10] = [
        Self::FoodAndDining,
        Self::Transportation,
        Self::Housing,
        Self::Utilities,
        Self::Insurance,
        Self::Healthcare,
        Self::Entertainment,
        Self::Shopping,
        Self::Education,
        Self::Other,
    ];

    /// Returns the display label, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::Healthcare => "Healthcare",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Category::FoodAndDining, "Food & Dining")]
    #[case(Category::Transportation, "Transportation")]
    #[case(Category::Other, "Other")]
    fn test_display_label(#[case] category: Category, #[case] label: &str) {
        assert_eq!(category.to_string(), label);
    }

    #[test]
    fn test_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_rejects_unknown_category() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("Groceries".to_string()));
    }

    #[test]
    fn test_serializes_to_display_label() {
        let json = serde_json::to_string(&Category::FoodAndDining).unwrap();
        assert_eq!(json, "\"Food & Dining\"");
    }

    #[test]
    fn test_all_has_no_duplicates() {
        let mut labels: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Category::ALL.len());
    }
}
