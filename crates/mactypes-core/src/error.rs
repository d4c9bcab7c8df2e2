//! Crate error type.

use crate::descriptor::{MacOsError, TypeCode};
use thiserror::Error;

/// Errors returned by the alias/file URL wrappers and the units value type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MacTypesError {
    /// A string passed where a `file://` URL was expected did not parse as one.
    #[error("not a file:// URL: {0}")]
    InvalidUrl(String),

    /// A coercion that needs an existing filesystem object found nothing there.
    #[error("{}", not_found_message(.path.as_deref()))]
    FileNotFound { path: Option<String> },

    /// Any other coercion failure, passed through untouched.
    #[error(transparent)]
    MacOs(#[from] MacOsError),

    /// A file URL descriptor carried bytes that are not UTF-8 text.
    #[error("descriptor of type '{type_code}' does not hold UTF-8 text")]
    NonUtf8Data { type_code: TypeCode },

    /// `Units::to_int` / `Units::to_float` could not convert the stored value.
    #[error("cannot convert {value:?} to {target}")]
    UnitConversion { value: String, target: &'static str },
}

pub type Result<T> = std::result::Result<T, MacTypesError>;

impl MacTypesError {
    /// Builds a `FileNotFound` with optional path context.
    pub fn file_not_found(path: Option<&str>) -> Self {
        MacTypesError::FileNotFound {
            path: path.map(str::to_string),
        }
    }

    /// OS error code for pass-through native errors.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            MacTypesError::MacOs(e) => Some(e.code()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MacTypesError::FileNotFound { .. })
    }
}

fn not_found_message(path: Option<&str>) -> String {
    match path {
        Some(p) => format!("File {:?} not found.", p),
        None => "File not found.".to_string(),
    }
}
