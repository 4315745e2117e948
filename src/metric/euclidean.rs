//! Bounds-checked Euclidean distance over the leading `length` elements.

use super::DistanceScore;
use crate::error::{DistanceError, Result, VectorRole};

/// Euclidean distance between the first `length` elements of `attempt` and `profile`.
///
/// Fails with [`DistanceError::LengthMismatch`] if `length` exceeds either slice;
/// no element is read in that case. Non-finite elements pass through.
pub fn euclidean_distance(attempt: &[f32], profile: &[f32], length: usize) -> Result<DistanceScore> {
    check_length(attempt.len(), profile.len(), length)?;
    Ok(DistanceScore(accumulate(&attempt[..length], &profile[..length])))
}

/// Like [`euclidean_distance`], but also rejects NaN/infinite elements in the compared prefix
/// and fails with [`DistanceError::ScoreOverflow`] when the result does not fit in an `f32`.
pub fn euclidean_distance_strict(
    attempt: &[f32],
    profile: &[f32],
    length: usize,
) -> Result<DistanceScore> {
    check_length(attempt.len(), profile.len(), length)?;
    let (attempt, profile) = (&attempt[..length], &profile[..length]);
    check_finite(attempt.iter().copied().enumerate(), VectorRole::Attempt)?;
    check_finite(profile.iter().copied().enumerate(), VectorRole::Profile)?;
    check_score(accumulate(attempt, profile), length)
}

pub(super) fn check_length(attempt_len: usize, profile_len: usize, length: usize) -> Result<()> {
    if length > attempt_len || length > profile_len {
        tracing::debug!(length, attempt_len, profile_len, "comparison length out of range");
        return Err(DistanceError::LengthMismatch {
            length,
            attempt_len,
            profile_len,
        });
    }
    Ok(())
}

/// First non-finite `(index, value)` in iteration order is reported
pub(super) fn check_finite(
    mut values: impl Iterator<Item = (usize, f32)>,
    role: VectorRole,
) -> Result<()> {
    match values.find(|(_, v)| !v.is_finite()) {
        Some((index, value)) => {
            tracing::debug!(role = role.as_str(), index, value, "non-finite feature");
            Err(DistanceError::NonFiniteInput { role, index, value })
        }
        None => Ok(()),
    }
}

pub(super) fn check_score(score: f32, length: usize) -> Result<DistanceScore> {
    if !score.is_finite() {
        tracing::debug!(length, "distance overflows f32");
        return Err(DistanceError::ScoreOverflow { length });
    }
    Ok(DistanceScore(score))
}

// Slices are already trimmed to equal length. Squares accumulate in f64 and narrow once.
fn accumulate(attempt: &[f32], profile: &[f32]) -> f32 {
    let sum: f64 = attempt
        .iter()
        .zip(profile)
        .map(|(&a, &p)| {
            let diff = f64::from(a) - f64::from(p);
            diff * diff
        })
        .sum();
    let score = sum.sqrt() as f32;
    tracing::trace!(length = attempt.len(), score, "distance computed");
    score
}
