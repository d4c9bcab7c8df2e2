//! Filesystem-backed descriptors for hosts without the Apple Event Manager.
//!
//! Emulates the handful of coercions the wrappers rely on:
//! - `furl` -> `alis`/`fsrf`: the target must exist; the result holds its
//!   canonical path.
//! - `alis`/`fsrf` -> `furl`: the aliased object must still exist.
//! - `furl`/`alis`/`fsrf` -> `utf8`: the POSIX path as text.
//!
//! Missing targets fail with the same OS codes the Alias Manager reports
//! (`nsvErr`, `dirNFErr`, `fnfErr`); everything else is `errAECoercionFail`.

use super::{
    AeDesc, MacOsError, TypeCode, DIR_NF_ERR, ERR_AE_COERCION_FAIL, FNF_ERR, NSV_ERR, PARAM_ERR,
    PERM_ERR, TYPE_ALIAS, TYPE_FILE_URL, TYPE_FS_REF, TYPE_UTF8_TEXT,
};
use crate::file_url_codec::{path_to_url, url_to_path};
use std::io;
use std::path::{Path, PathBuf};

const VOLUMES_DIR: &str = "/Volumes";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PosixDesc {
    type_code: TypeCode,
    data: Vec<u8>,
}

impl PosixDesc {
    /// Convenience for text-typed descriptors.
    pub fn text(type_code: TypeCode, data: &str) -> Self {
        Self {
            type_code,
            data: data.as_bytes().to_vec(),
        }
    }

    fn posix_path(&self) -> Result<String, MacOsError> {
        match self.type_code {
            TYPE_FILE_URL => {
                let url =
                    std::str::from_utf8(&self.data).map_err(|_| MacOsError::new(PARAM_ERR))?;
                url_to_path(url).map_err(|_| MacOsError::new(PARAM_ERR))
            }
            TYPE_ALIAS | TYPE_FS_REF => {
                String::from_utf8(self.data.clone()).map_err(|_| MacOsError::new(PARAM_ERR))
            }
            _ => Err(MacOsError::new(ERR_AE_COERCION_FAIL)),
        }
    }
}

impl AeDesc for PosixDesc {
    fn new(type_code: TypeCode, data: Vec<u8>) -> Self {
        Self { type_code, data }
    }

    fn type_code(&self) -> TypeCode {
        self.type_code
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn coerce(&self, to: TypeCode) -> Result<Self, MacOsError> {
        if to == self.type_code {
            return Ok(self.clone());
        }
        let path = self.posix_path()?;
        match to {
            TYPE_ALIAS | TYPE_FS_REF => {
                let resolved = resolve_existing(&path)?;
                Ok(Self::text(to, &resolved))
            }
            TYPE_FILE_URL => {
                if !Path::new(&path).exists() {
                    return Err(MacOsError::new(FNF_ERR));
                }
                Ok(Self::text(TYPE_FILE_URL, &path_to_url(&path)))
            }
            TYPE_UTF8_TEXT => Ok(Self::text(TYPE_UTF8_TEXT, &path)),
            _ => Err(MacOsError::new(ERR_AE_COERCION_FAIL)),
        }
    }
}

fn resolve_existing(path: &str) -> Result<String, MacOsError> {
    let resolved = std::fs::canonicalize(path).map_err(|e| missing_path_error(Path::new(path), &e))?;
    resolved
        .into_os_string()
        .into_string()
        .map_err(|_| MacOsError::new(PARAM_ERR))
}

/// Maps a failed lookup to the code the Alias Manager would report.
fn missing_path_error(path: &Path, err: &io::Error) -> MacOsError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        return MacOsError::new(PERM_ERR);
    }
    if let Some(volume) = volume_root(path) {
        if !volume.exists() {
            return MacOsError::new(NSV_ERR);
        }
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            MacOsError::new(DIR_NF_ERR)
        }
        _ => MacOsError::new(FNF_ERR),
    }
}

fn volume_root(path: &Path) -> Option<PathBuf> {
    let rest = path.strip_prefix(VOLUMES_DIR).ok()?;
    let name = rest.components().next()?;
    Some(Path::new(VOLUMES_DIR).join(name))
}
