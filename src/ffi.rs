//! C ABI for native callers (server FFI bindings, mobile clients).
//!
//! Callers pass buffer sizes alongside the pointers so the comparison length is
//! checked against real allocations instead of trusted.

use crate::metric::{euclidean_distance, euclidean_distance_strict};
use std::slice;

pub const BIOKEY_OK: i32 = 0;
pub const BIOKEY_ERR_NULL_POINTER: i32 = -1;
pub const BIOKEY_ERR_LENGTH_MISMATCH: i32 = -2;
pub const BIOKEY_ERR_NON_FINITE: i32 = -3;
pub const BIOKEY_ERR_OVERFLOW: i32 = -4;

/// Euclidean distance between the first `length` elements of two feature buffers.
///
/// Writes the score to `out_score` and returns `BIOKEY_OK`, or returns a negative
/// status and leaves `out_score` untouched.
///
/// # Safety
/// - `attempt` must point to `attempt_len` readable `f32`s (may be null only if `attempt_len` is 0)
/// - `profile` must point to `profile_len` readable `f32`s (may be null only if `profile_len` is 0)
/// - `out_score` must be a valid, writable `f32` pointer
#[no_mangle]
pub unsafe extern "C" fn biokey_calculate_distance(
    attempt: *const f32,
    attempt_len: usize,
    profile: *const f32,
    profile_len: usize,
    length: usize,
    strict: bool,
    out_score: *mut f32,
) -> i32 {
    if out_score.is_null() {
        return BIOKEY_ERR_NULL_POINTER;
    }
    let Some(attempt) = (unsafe { as_slice(attempt, attempt_len) }) else {
        return BIOKEY_ERR_NULL_POINTER;
    };
    let Some(profile) = (unsafe { as_slice(profile, profile_len) }) else {
        return BIOKEY_ERR_NULL_POINTER;
    };

    let result = if strict {
        euclidean_distance_strict(attempt, profile, length)
    } else {
        euclidean_distance(attempt, profile, length)
    };
    match result {
        Ok(score) => {
            unsafe { *out_score = score.value() };
            BIOKEY_OK
        }
        Err(e) => e.code(),
    }
}

unsafe fn as_slice<'a>(ptr: *const f32, len: usize) -> Option<&'a [f32]> {
    if ptr.is_null() {
        return if len == 0 { Some(&[][..]) } else { None };
    }
    Some(unsafe { slice::from_raw_parts(ptr, len) })
}
