use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Higher,
    Lower,
    Indifferent,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Higher => write!(f, "Higher"),
            Verdict::Lower => write!(f, "Lower"),
            Verdict::Indifferent => write!(f, "50/50"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "Low"),
            Confidence::Medium => write!(f, "Med"),
            Confidence::High => write!(f, "High"),
        }
    }
}

/// Counts of remaining cards relative to a reference rank, with the call
/// they support. Derived from the deck on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub reference: Rank,
    pub higher_count: usize,
    pub lower_count: usize,
    pub equal_count: usize,
    pub verdict: Verdict,
    pub confidence: Confidence,
}

impl Recommendation {
    pub fn total(&self) -> usize {
        self.higher_count + self.lower_count + self.equal_count
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Lower: {} | Higher: {}",
            self.verdict, self.lower_count, self.higher_count
        )?;
        if self.equal_count > 0 {
            write!(f, " | Equal: {}", self.equal_count)?;
        }
        write!(f, " {} confidence", self.confidence)
    }
}
