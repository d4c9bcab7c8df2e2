//! Path to file URL.

use super::URL_PREFIX;

/// Bytes left as-is in the escaped path.
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'/')
}

/// Converts a POSIX path to a `file://localhost/...` URL.
///
/// Every byte outside `[A-Za-z0-9_./]` is written as `%xx` (lowercase hex).
///
/// # Examples
///
/// - `path_to_url("/tmp/a b.txt")` → `"file://localhost/tmp/a%20b.txt"`
/// - `path_to_url("/caf\u{e9}")` → `"file://localhost/caf%c3%a9"`
pub fn path_to_url(path: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut out = String::with_capacity(URL_PREFIX.len() + path.len());
    out.push_str(URL_PREFIX);
    for &b in path.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}
