//! Variance-aware distance over matched key pairs.
//!
//! Each dwell and flight timing becomes a z-score against the profile's mean and
//! standard deviation, clamped and passed through a Huber loss. Pairs are weighted
//! by how stable (sample count) and how tight (inverse std) their profile is, and the
//! score is `sqrt(Σ w·(loss_dwell + loss_flight) / Σ 2w)`.

use super::euclidean::{check_finite, check_length, check_score};
use super::DistanceScore;
use crate::config::VarianceAwareParams;
use crate::error::{Result, VectorRole};
use crate::features::{KeyPairProfile, KeyPairTiming};

/// Variance-aware distance between the first `length` pairs of `attempt` and `profile`.
///
/// Pairs must already be matched by key (index `i` of both slices is the same pair).
/// Fails with [`DistanceError::LengthMismatch`](crate::DistanceError::LengthMismatch)
/// if `length` exceeds either slice. Zero pairs score 0.
pub fn variance_aware_distance(
    attempt: &[KeyPairTiming],
    profile: &[KeyPairProfile],
    length: usize,
    params: &VarianceAwareParams,
) -> Result<DistanceScore> {
    check_length(attempt.len(), profile.len(), length)?;
    Ok(DistanceScore(accumulate(&attempt[..length], &profile[..length], params)))
}

/// Like [`variance_aware_distance`], but rejects non-finite timings or statistics.
/// Reported indices are pair indices.
pub fn variance_aware_distance_strict(
    attempt: &[KeyPairTiming],
    profile: &[KeyPairProfile],
    length: usize,
    params: &VarianceAwareParams,
) -> Result<DistanceScore> {
    check_length(attempt.len(), profile.len(), length)?;
    let (attempt, profile) = (&attempt[..length], &profile[..length]);
    check_finite(
        attempt
            .iter()
            .enumerate()
            .flat_map(|(i, t)| [(i, t.dwell), (i, t.flight)]),
        VectorRole::Attempt,
    )?;
    check_finite(
        profile.iter().enumerate().flat_map(|(i, p)| {
            [
                (i, p.mean_dwell),
                (i, p.mean_flight),
                (i, p.std_dwell),
                (i, p.std_flight),
            ]
        }),
        VectorRole::Profile,
    )?;
    check_score(accumulate(attempt, profile, params), length)
}

/// Quadratic within `delta`, linear beyond it
pub fn huber_loss(value: f64, delta: f64) -> f64 {
    let abs = value.abs();
    if abs <= delta {
        0.5 * abs * abs
    } else {
        delta * (abs - 0.5 * delta)
    }
}

fn accumulate(
    attempt: &[KeyPairTiming],
    profile: &[KeyPairProfile],
    params: &VarianceAwareParams,
) -> f32 {
    let min_std = f64::from(params.min_feature_std);
    // clamp() panics on NaN or inverted bounds
    let max_z = match f64::from(params.max_z).abs() {
        z if z.is_nan() => f64::INFINITY,
        z => z,
    };
    let delta = f64::from(params.huber_delta);

    let mut weighted_loss = 0.0f64;
    let mut weight_sum = 0.0f64;
    for (t, p) in attempt.iter().zip(profile) {
        let std_dwell = f64::from(p.std_dwell).max(min_std);
        let std_flight = f64::from(p.std_flight).max(min_std);

        let z_dwell =
            ((f64::from(t.dwell) - f64::from(p.mean_dwell)) / std_dwell).clamp(-max_z, max_z);
        let z_flight =
            ((f64::from(t.flight) - f64::from(p.mean_flight)) / std_flight).clamp(-max_z, max_z);

        let stability = (f64::from(p.sample_count.max(2)) + 1.0).ln();
        let tightness = 1.0 / std_dwell + 1.0 / std_flight;
        let weight = (stability * tightness).max(f64::from(params.min_weight));

        weighted_loss += weight * (huber_loss(z_dwell, delta) + huber_loss(z_flight, delta));
        weight_sum += weight * 2.0;
    }

    if weight_sum <= 0.0 {
        return 0.0;
    }
    let score = (weighted_loss / weight_sum).sqrt() as f32;
    tracing::trace!(pairs = attempt.len(), score, "variance-aware distance computed");
    score
}
