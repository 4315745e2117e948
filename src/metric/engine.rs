//! Configured distance metric: strict or lenient checks around the Euclidean and
//! variance-aware cores.

use super::euclidean::{euclidean_distance, euclidean_distance_strict};
use super::variance_aware::{variance_aware_distance, variance_aware_distance_strict};
use super::DistanceScore;
use crate::config::MetricConfig;
use crate::error::Result;
use crate::features::{FeatureVector, KeyPairProfile, KeyPairTiming};

#[derive(Debug, Clone, Default)]
pub struct DistanceMetric {
    config: MetricConfig,
}

impl DistanceMetric {
    pub fn new(config: MetricConfig) -> Self {
        Self { config }
    }

    /// Finiteness checks on
    pub fn strict() -> Self {
        Self::new(MetricConfig {
            strict: true,
            ..MetricConfig::default()
        })
    }

    /// Bounds check only, for callers whose extractor output is trusted
    pub fn lenient() -> Self {
        Self::new(MetricConfig {
            strict: false,
            ..MetricConfig::default()
        })
    }

    pub fn distance(&self, attempt: &[f32], profile: &[f32], length: usize) -> Result<DistanceScore> {
        if self.config.strict {
            euclidean_distance_strict(attempt, profile, length)
        } else {
            euclidean_distance(attempt, profile, length)
        }
    }

    /// Compare the whole attempt; the profile must be at least as long.
    pub fn score(&self, attempt: &[f32], profile: &[f32]) -> Result<DistanceScore> {
        self.distance(attempt, profile, attempt.len())
    }

    pub fn compare(&self, attempt: &FeatureVector, profile: &FeatureVector) -> Result<DistanceScore> {
        self.score(attempt.as_slice(), profile.as_slice())
    }

    /// Variance-aware distance over the first `length` matched key pairs
    pub fn variance_aware(
        &self,
        attempt: &[KeyPairTiming],
        profile: &[KeyPairProfile],
        length: usize,
    ) -> Result<DistanceScore> {
        let params = &self.config.variance_aware;
        if self.config.strict {
            variance_aware_distance_strict(attempt, profile, length, params)
        } else {
            variance_aware_distance(attempt, profile, length, params)
        }
    }

    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    pub fn config(&self) -> &MetricConfig {
        &self.config
    }
}
