//! File URL to path.

use super::SCHEME;
use crate::error::{MacTypesError, Result};

/// Extracts and decodes the path of a `file://` URL.
///
/// The scheme is matched case-insensitively and the authority (normally
/// `localhost`) is skipped up to the first `/`. `%XX` escapes in either case
/// are decoded to raw bytes.
///
/// Fails with [`MacTypesError::InvalidUrl`] when the input is not a `file://`
/// URL with a path, when a `%` is not followed by two hex digits, or when the
/// decoded bytes are not UTF-8.
pub fn url_to_path(url: &str) -> Result<String> {
    let invalid = || MacTypesError::InvalidUrl(url.to_string());

    let rest = match url.get(..SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(SCHEME) => &url[SCHEME.len()..],
        _ => return Err(invalid()),
    };
    let slash = rest.find('/').ok_or_else(invalid)?;
    let bytes = percent_decode(&rest[slash..]).ok_or_else(invalid)?;
    String::from_utf8(bytes).map_err(|_| invalid())
}

/// Decodes `%XX` escapes. Returns `None` on a truncated or non-hex escape.
fn percent_decode(input: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b == b'%' {
            let high = bytes.next().and_then(hex_digit)?;
            let low = bytes.next().and_then(hex_digit)?;
            out.push(high << 4 | low);
        } else {
            out.push(b);
        }
    }
    Some(out)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
