//! Error types for the distance engine. All variants are caller errors: never retried.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DistanceError>;

/// Which side of the comparison an element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorRole {
    Attempt,
    Profile,
}

impl VectorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            VectorRole::Attempt => "attempt",
            VectorRole::Profile => "profile",
        }
    }
}

impl fmt::Display for VectorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistanceError {
    #[error("length {length} exceeds vector size (attempt: {attempt_len}, profile: {profile_len})")]
    LengthMismatch {
        length: usize,
        attempt_len: usize,
        profile_len: usize,
    },

    #[error("non-finite {role} element at index {index}: {value}")]
    NonFiniteInput {
        role: VectorRole,
        index: usize,
        value: f32,
    },

    /// Finite inputs whose distance does not fit in an `f32` (strict mode only)
    #[error("distance over {length} elements overflows f32")]
    ScoreOverflow { length: usize },
}

impl DistanceError {
    /// Status code reported across the C ABI
    pub fn code(&self) -> i32 {
        match self {
            DistanceError::LengthMismatch { .. } => crate::ffi::BIOKEY_ERR_LENGTH_MISMATCH,
            DistanceError::NonFiniteInput { .. } => crate::ffi::BIOKEY_ERR_NON_FINITE,
            DistanceError::ScoreOverflow { .. } => crate::ffi::BIOKEY_ERR_OVERFLOW,
        }
    }
}
