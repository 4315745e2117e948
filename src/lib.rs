//! BioKey distance engine — scores a live keystroke attempt against a stored profile.
//!
//! Modular structure:
//! - [`metric`] — Bounds-checked Euclidean and variance-aware distances, strict and lenient modes
//! - [`features`] — Feature vectors supplied by the upstream extractor
//! - [`error`] — Caller-error taxonomy
//! - [`config`] — JSON configuration
//! - [`logging`] — Structured JSON logging
//! - [`ffi`] — C ABI for native callers

pub mod config;
pub mod error;
pub mod features;
pub mod ffi;
pub mod logging;
pub mod metric;

pub use config::{LogConfig, MetricConfig, VarianceAwareParams};
pub use error::{DistanceError, VectorRole};
pub use features::{FeatureVector, KeyPairProfile, KeyPairTiming};
pub use logging::StructuredLogger;
pub use metric::{
    euclidean_distance, euclidean_distance_strict, variance_aware_distance,
    variance_aware_distance_strict, DistanceMetric, DistanceScore, InvalidScore,
};
