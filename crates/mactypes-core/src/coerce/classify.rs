//! Classify native coercion failures.

use crate::descriptor::{DIR_NF_ERR, ERR_AE_COERCION_FAIL, FNF_ERR, NSV_ERR};

/// OS codes that mean "the filesystem object is not there".
///
/// `errAECoercionFail` is included: the Alias Manager reports it when a file
/// URL cannot be resolved to an alias.
pub const NOT_FOUND_CODES: [i32; 4] = [NSV_ERR, FNF_ERR, DIR_NF_ERR, ERR_AE_COERCION_FAIL];

/// How a failed coercion is surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionFailure {
    /// Disk, file, or folder missing: reported as `FileNotFound`.
    NotFound,
    /// Anything else: the native error is returned unchanged.
    Other,
}

pub fn classify_os_error(code: i32) -> CoercionFailure {
    if NOT_FOUND_CODES.contains(&code) {
        CoercionFailure::NotFound
    } else {
        CoercionFailure::Other
    }
}

pub fn is_not_found(code: i32) -> bool {
    classify_os_error(code) == CoercionFailure::NotFound
}
