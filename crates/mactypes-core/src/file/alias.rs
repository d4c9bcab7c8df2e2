//! `typeAlias` wrapper.
//!
//! An alias follows its filesystem object across moves and renames, so the
//! descriptor is the only state kept; path and URL are asked of the OS on
//! every call.

use super::{hash_desc, same_desc, FileUrl};
use crate::coerce::{coerce, coerce_or_not_found, text_data};
use crate::descriptor::{AeDesc, TYPE_ALIAS, TYPE_FILE_URL};
use crate::error::Result;
use crate::file_url_codec::{path_to_url, url_to_path};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone)]
pub struct Alias<D: AeDesc> {
    desc: D,
}

impl<D: AeDesc> Alias<D> {
    /// Makes an alias to the existing filesystem object at `path`.
    ///
    /// Fails with `FileNotFound` when nothing exists there.
    pub fn from_path(path: &str) -> Result<Self> {
        let furl = D::new(TYPE_FILE_URL, path_to_url(path).into_bytes());
        let desc = coerce_or_not_found(&furl, TYPE_ALIAS, Some(path))?;
        Ok(Self { desc })
    }

    /// Makes an alias from a file URL. Only the path part is used.
    pub fn from_url(url: &str) -> Result<Self> {
        Self::from_path(&url_to_path(url)?)
    }

    /// Wraps a descriptor as-is. The caller guarantees it is `typeAlias`;
    /// any other type surfaces later as coercion errors.
    pub fn from_desc_unchecked(desc: D) -> Self {
        Self { desc }
    }

    /// The `typeAlias` descriptor. Coerce it for other representations.
    pub fn desc(&self) -> &D {
        &self.desc
    }

    pub fn into_desc(self) -> D {
        self.desc
    }

    /// Current location as a file URL string.
    pub fn url(&self) -> Result<String> {
        text_data(&coerce(&self.desc, TYPE_FILE_URL)?)
    }

    /// Current location as a POSIX path.
    pub fn path(&self) -> Result<String> {
        let furl = coerce_or_not_found(&self.desc, TYPE_FILE_URL, None)?;
        url_to_path(&text_data(&furl)?)
    }

    pub fn to_alias(&self) -> Alias<D> {
        self.clone()
    }

    /// Converts to a `FileUrl` holding a `typeFileURL` descriptor.
    ///
    /// A vanished target reports `FileNotFound` without a path: the path is
    /// only known through this same coercion.
    pub fn to_file_url(&self) -> Result<FileUrl<D>> {
        let furl = coerce_or_not_found(&self.desc, TYPE_FILE_URL, None)?;
        Ok(FileUrl::from_desc_unchecked(furl))
    }
}

impl<D: AeDesc> PartialEq for Alias<D> {
    fn eq(&self, other: &Self) -> bool {
        same_desc(&self.desc, &other.desc)
    }
}

impl<D: AeDesc> Eq for Alias<D> {}

impl<D: AeDesc> Hash for Alias<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_desc(&self.desc, state);
    }
}

impl<D: AeDesc> fmt::Display for Alias<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Ok(path) => f.write_str(&path),
            Err(_) => f.write_str("<unresolved alias>"),
        }
    }
}

impl<D: AeDesc> fmt::Debug for Alias<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Ok(path) => write!(f, "Alias::from_path({:?})", path),
            Err(_) => write!(
                f,
                "Alias::from_desc_unchecked('{}', {} bytes)",
                self.desc.type_code(),
                self.desc.data().len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::MacOsError;
    use crate::error::MacTypesError;
    use crate::file::mock::{coercions, fail_with, MockDesc};
    use std::collections::HashSet;

    #[test]
    fn from_path_coerces_to_alias() {
        let before = coercions();
        let a = Alias::<MockDesc>::from_path("/tmp/a b.txt").unwrap();
        assert_eq!(a.desc().type_code(), TYPE_ALIAS);
        assert_eq!(a.desc().data(), b"alias:file://localhost/tmp/a%20b.txt");
        assert_eq!(coercions(), before + 1);
    }

    #[test]
    fn path_and_url_are_derived() {
        let a = Alias::<MockDesc>::from_path("/tmp/a b.txt").unwrap();
        assert_eq!(a.path().unwrap(), "/tmp/a b.txt");
        assert_eq!(a.url().unwrap(), "file://localhost/tmp/a%20b.txt");
        // No caching: every accessor goes back to the descriptor.
        let before = coercions();
        a.path().unwrap();
        a.path().unwrap();
        assert_eq!(coercions(), before + 2);
    }

    #[test]
    fn from_url_uses_path_portion() {
        let a = Alias::<MockDesc>::from_url("file://somehost/x/y%20z").unwrap();
        assert_eq!(a.path().unwrap(), "/x/y z");
        assert!(matches!(
            Alias::<MockDesc>::from_url("not a url"),
            Err(MacTypesError::InvalidUrl(_))
        ));
    }

    #[test]
    fn equality_across_constructors() {
        let a = Alias::<MockDesc>::from_path("/a/b").unwrap();
        let b = Alias::from_desc_unchecked(MockDesc::alias_for_url("file://localhost/a/b"));
        let c = Alias::<MockDesc>::from_path("/a/c").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn from_path_missing_is_file_not_found() {
        fail_with(Some(-43));
        let err = Alias::<MockDesc>::from_path("/no/such").unwrap_err();
        fail_with(None);
        assert_eq!(err, MacTypesError::file_not_found(Some("/no/such")));
        assert_eq!(err.to_string(), "File \"/no/such\" not found.");
    }

    #[test]
    fn from_path_other_error_propagates() {
        fail_with(Some(-50));
        let err = Alias::<MockDesc>::from_path("/x").unwrap_err();
        fail_with(None);
        assert_eq!(err, MacTypesError::MacOs(MacOsError::new(-50)));
    }

    #[test]
    fn path_on_vanished_target_has_no_context() {
        let a = Alias::<MockDesc>::from_path("/gone").unwrap();
        fail_with(Some(-43));
        let err = a.path().unwrap_err();
        let url_err = a.url().unwrap_err();
        fail_with(None);
        assert_eq!(err, MacTypesError::file_not_found(None));
        // `url` passes native errors straight through.
        assert_eq!(url_err.os_code(), Some(-43));
    }

    #[test]
    fn to_file_url_and_back() {
        let a = Alias::<MockDesc>::from_path("/a/b").unwrap();
        let f = a.to_file_url().unwrap();
        assert_eq!(f.desc().type_code(), TYPE_FILE_URL);
        assert_eq!(f.path().unwrap(), "/a/b");
        assert_eq!(f.to_alias().unwrap(), a);
        assert_eq!(a.to_alias(), a);
    }

    #[test]
    fn to_file_url_coerces_once() {
        let a = Alias::<MockDesc>::from_path("/a/b").unwrap();
        let before = coercions();
        a.to_file_url().unwrap();
        assert_eq!(coercions(), before + 1);
    }

    #[test]
    fn to_file_url_on_vanished_target() {
        let a = Alias::<MockDesc>::from_path("/gone").unwrap();
        let before = coercions();
        fail_with(Some(-43));
        let err = a.to_file_url().unwrap_err();
        fail_with(None);
        assert_eq!(err, MacTypesError::file_not_found(None));
        assert_eq!(coercions(), before + 1);
    }

    #[test]
    fn debug_and_display() {
        let a = Alias::<MockDesc>::from_path("/a/b c").unwrap();
        assert_eq!(a.to_string(), "/a/b c");
        assert_eq!(format!("{:?}", a), "Alias::from_path(\"/a/b c\")");
    }
}
