//! Shared helpers for filesystem-backed integration tests.

use std::path::Path;

/// Canonical UTF-8 form of an existing path, as the POSIX backend reports it.
pub fn canonical(path: &Path) -> String {
    std::fs::canonicalize(path)
        .expect("canonicalize")
        .into_os_string()
        .into_string()
        .expect("utf-8 path")
}

pub fn utf8(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}
