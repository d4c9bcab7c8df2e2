//! POSIX path <-> `file://localhost` URL conversion.
//!
//! Escaping is byte-wise: every byte outside `[A-Za-z0-9_./]` becomes `%xx`
//! with lowercase hex, so multi-byte UTF-8 characters turn into one escape per
//! byte. Only the path part of an incoming URL is used; the host is ignored.

mod escape;
mod unescape;

pub use escape::path_to_url;
pub use unescape::url_to_path;

/// Prefix of every URL produced by [`path_to_url`].
pub const URL_PREFIX: &str = "file://localhost";

const SCHEME: &str = "file://";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_round_trips() {
        for p in ["/", "/a/b", "/Users/has/Documents/report_2.txt", "/A.Z/0.9/_"] {
            let url = path_to_url(p);
            assert_eq!(url, format!("{}{}", URL_PREFIX, p));
            assert_eq!(url_to_path(&url).unwrap(), p);
        }
    }

    #[test]
    fn escaped_paths_round_trip() {
        for p in [
            "/tmp/a b.txt",
            "/tmp/caf\u{e9}/na\u{ef}ve-file",
            "/Volumes/Macintosh HD/100% done?.txt",
            "/\u{65e5}\u{672c}\u{8a9e}/#x&y=z",
        ] {
            assert_eq!(url_to_path(&path_to_url(p)).unwrap(), p);
        }
    }

    #[test]
    fn space_example() {
        assert_eq!(path_to_url("/tmp/a b.txt"), "file://localhost/tmp/a%20b.txt");
        assert_eq!(
            url_to_path("file://localhost/tmp/a%20b.txt").unwrap(),
            "/tmp/a b.txt"
        );
    }
}
