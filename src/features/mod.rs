//! Keystroke feature vectors handed in by the upstream extractor.
//!
//! Layout (interleaved dwell/flight or separate runs) is the extractor's convention;
//! this crate only relies on both sides using the same order.

use serde::{Deserialize, Serialize};

/// Ordered timing measurements (dwell and flight times) in single precision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    pub values: Vec<f32>,
}

impl FeatureVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every element multiplied by `k`
    pub fn scaled(&self, k: f32) -> Self {
        Self {
            values: self.values.iter().map(|v| v * k).collect(),
        }
    }
}

impl From<Vec<f32>> for FeatureVector {
    fn from(values: Vec<f32>) -> Self {
        Self { values }
    }
}

impl From<&[f32]> for FeatureVector {
    fn from(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl AsRef<[f32]> for FeatureVector {
    fn as_ref(&self) -> &[f32] {
        &self.values
    }
}

/// Live dwell/flight timings (ms) for one key pair of the attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyPairTiming {
    pub dwell: f32,
    pub flight: f32,
}

/// Enrolled statistics for one key pair, maintained by the profile store
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyPairProfile {
    pub mean_dwell: f32,
    pub mean_flight: f32,
    pub std_dwell: f32,
    pub std_flight: f32,
    /// Samples the means were built from
    pub sample_count: u32,
}
