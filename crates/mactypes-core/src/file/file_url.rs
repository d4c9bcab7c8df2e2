//! `typeFileURL` wrapper for locations that may not exist yet.
//!
//! Holds a path, a descriptor, or both. Whichever is missing is computed on
//! first use and kept for the life of the value.

use super::{hash_desc, same_desc, Alias};
use crate::coerce::{coerce, coerce_or_not_found, text_data};
use crate::descriptor::{AeDesc, TYPE_ALIAS, TYPE_FILE_URL};
use crate::error::Result;
use crate::file_url_codec::{path_to_url, url_to_path};
use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Invariant: at least one of `path` and `desc` is set.
#[derive(Clone)]
pub struct FileUrl<D: AeDesc> {
    path: OnceCell<String>,
    desc: OnceCell<D>,
}

impl<D: AeDesc> FileUrl<D> {
    /// Makes a file URL for `path`. No descriptor is built until needed.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: OnceCell::from(path.into()),
            desc: OnceCell::new(),
        }
    }

    /// Makes a file URL from a URL string. Only the path part is used.
    pub fn from_url(url: &str) -> Result<Self> {
        Ok(Self::from_path(url_to_path(url)?))
    }

    /// Wraps a `typeFileURL`, `typeFSRef` or `typeFSS` descriptor as-is.
    /// The type is not checked.
    pub fn from_desc_unchecked(desc: D) -> Self {
        Self {
            path: OnceCell::new(),
            desc: OnceCell::from(desc),
        }
    }

    /// The packed descriptor. Built from the path as `typeFileURL` when absent;
    /// descriptors returned by an application may be of another file type.
    pub fn desc(&self) -> &D {
        self.desc.get_or_init(|| {
            let path = self.path.get().map(String::as_str).unwrap_or_default();
            tracing::trace!(path, "building file URL descriptor");
            D::new(TYPE_FILE_URL, path_to_url(path).into_bytes())
        })
    }

    /// Location as a file URL string. The target need not exist.
    pub fn url(&self) -> Result<String> {
        let desc = self.desc();
        if desc.type_code() == TYPE_FILE_URL {
            return text_data(desc);
        }
        text_data(&coerce(desc, TYPE_FILE_URL)?)
    }

    /// Location as a POSIX path, resolved through the descriptor once.
    pub fn path(&self) -> Result<&str> {
        if let Some(path) = self.path.get() {
            return Ok(path.as_str());
        }
        let furl = coerce_or_not_found(self.desc(), TYPE_FILE_URL, None)?;
        let path = url_to_path(&text_data(&furl)?)?;
        tracing::trace!(path = %path, "resolved file URL path");
        Ok(self.path.get_or_init(|| path).as_str())
    }

    /// Converts to an alias. The target must exist.
    pub fn to_alias(&self) -> Result<Alias<D>> {
        let desc = coerce_or_not_found(self.desc(), TYPE_ALIAS, self.known_path())?;
        Ok(Alias::from_desc_unchecked(desc))
    }

    /// Returns a fresh `FileUrl` holding a `typeFileURL` descriptor.
    pub fn to_file_url(&self) -> Result<FileUrl<D>> {
        let desc = coerce_or_not_found(self.desc(), TYPE_FILE_URL, self.known_path())?;
        Ok(FileUrl::from_desc_unchecked(desc))
    }

    fn known_path(&self) -> Option<&str> {
        self.path.get().map(String::as_str)
    }
}

impl<D: AeDesc> PartialEq for FileUrl<D> {
    fn eq(&self, other: &Self) -> bool {
        same_desc(self.desc(), other.desc())
    }
}

impl<D: AeDesc> Eq for FileUrl<D> {}

impl<D: AeDesc> Hash for FileUrl<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_desc(self.desc(), state);
    }
}

impl<D: AeDesc> fmt::Display for FileUrl<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Ok(path) => f.write_str(path),
            Err(_) => f.write_str("<unresolved file URL>"),
        }
    }
}

impl<D: AeDesc> fmt::Debug for FileUrl<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Ok(path) => write!(f, "FileUrl::from_path({:?})", path),
            Err(_) => {
                let desc = self.desc();
                write!(
                    f,
                    "FileUrl::from_desc_unchecked('{}', {} bytes)",
                    desc.type_code(),
                    desc.data().len()
                )
            }
        }
    }
}
