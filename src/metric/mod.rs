//! Distance between a live keystroke attempt and a stored profile.

mod engine;
mod euclidean;
mod variance_aware;

pub use engine::DistanceMetric;
pub use euclidean::{euclidean_distance, euclidean_distance_strict};
pub use variance_aware::{huber_loss, variance_aware_distance, variance_aware_distance_strict};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Non-negative dissimilarity; 0 means identical. Unbounded, not a probability.
///
/// Deserialization goes through [`TryFrom<f32>`], so only finite, non-negative values load.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(into = "f32", try_from = "f32")]
pub struct DistanceScore(pub(crate) f32);

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("invalid distance score {0}: must be finite and non-negative")]
pub struct InvalidScore(pub f32);

impl TryFrom<f32> for DistanceScore {
    type Error = InvalidScore;

    fn try_from(value: f32) -> std::result::Result<Self, Self::Error> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(InvalidScore(value))
        }
    }
}

impl DistanceScore {
    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_exact_match(self) -> bool {
        self.0 == 0.0
    }
}

impl From<DistanceScore> for f32 {
    fn from(score: DistanceScore) -> Self {
        score.0
    }
}

impl fmt::Display for DistanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Score a full attempt against its profile (length taken from the attempt), lenient mode.
pub fn score(attempt: &[f32], profile: &[f32]) -> Result<DistanceScore> {
    euclidean_distance(attempt, profile, attempt.len())
}
