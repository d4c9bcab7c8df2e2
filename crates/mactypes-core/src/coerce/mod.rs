//! Descriptor coercion with not-found translation.
//!
//! This is the only place native errors are rewritten: the four codes in
//! [`NOT_FOUND_CODES`] become [`MacTypesError::FileNotFound`], every other
//! failure is returned as [`MacTypesError::MacOs`].

mod classify;

pub use classify::{classify_os_error, is_not_found, CoercionFailure, NOT_FOUND_CODES};

use crate::descriptor::{AeDesc, TypeCode};
use crate::error::{MacTypesError, Result};

/// Coerces `desc` to `to`, reporting missing filesystem objects as
/// `FileNotFound` (with `path` in the message when known).
pub fn coerce_or_not_found<D: AeDesc>(desc: &D, to: TypeCode, path: Option<&str>) -> Result<D> {
    desc.coerce(to).map_err(|e| {
        tracing::debug!(
            from = %desc.type_code(),
            to = %to,
            code = e.code(),
            path = path.unwrap_or(""),
            "descriptor coercion failed"
        );
        match classify_os_error(e.code()) {
            CoercionFailure::NotFound => MacTypesError::file_not_found(path),
            CoercionFailure::Other => MacTypesError::MacOs(e),
        }
    })
}

/// Coerces `desc` to `to` without translating native errors.
pub(crate) fn coerce<D: AeDesc>(desc: &D, to: TypeCode) -> Result<D> {
    Ok(desc.coerce(to)?)
}

/// Reads a descriptor's payload as UTF-8 text.
pub(crate) fn text_data<D: AeDesc>(desc: &D) -> Result<String> {
    String::from_utf8(desc.data().to_vec()).map_err(|_| MacTypesError::NonUtf8Data {
        type_code: desc.type_code(),
    })
}
