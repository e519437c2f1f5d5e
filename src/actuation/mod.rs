use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::advisor::{Recommendation, Verdict};

/// The move to make on the player's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Higher,
    Lower,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Higher => write!(f, "higher"),
            Choice::Lower => write!(f, "lower"),
        }
    }
}

/// Follows the verdict, flipping a fair coin when it is indifferent.
pub fn choose<R: Rng + ?Sized>(recommendation: &Recommendation, rng: &mut R) -> Choice {
    match recommendation.verdict {
        Verdict::Higher => Choice::Higher,
        Verdict::Lower => Choice::Lower,
        Verdict::Indifferent => {
            if rng.random_bool(0.5) {
                Choice::Higher
            } else {
                Choice::Lower
            }
        }
    }
}
