use serde::{Deserialize, Serialize};

use super::rating::Rating;

/// Unique identifier for a review, derived from its creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub i64);

impl ReviewId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReviewId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ReviewId)
            .map_err(|_| format!("invalid review id: {s}"))
    }
}

/// A single persisted testimonial. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    #[serde(default)]
    pub position: String,
    pub rating: Rating,
    pub text: String,
    /// Display-formatted creation date, e.g. "January 5, 2025".
    pub date: String,
}

impl Review {
    /// Number of filled and empty stars for this review's rating.
    pub fn stars(&self) -> (usize, usize) {
        let filled = self.rating.value() as usize;
        (filled, Rating::MAX as usize - filled)
    }

    pub fn has_position(&self) -> bool {
        !self.position.is_empty()
    }
}
