//! Four-character Apple Event type codes.

use std::fmt;

/// A native descriptor type tag, e.g. `'alis'` or `'furl'`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeCode(u32);

impl TypeCode {
    pub const fn new(code: u32) -> Self {
        TypeCode(code)
    }

    /// Builds a code from its four ASCII characters, as written in the AE headers.
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        TypeCode(u32::from_be_bytes(b))
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// `typeAlias`
pub const TYPE_ALIAS: TypeCode = TypeCode::from_bytes(*b"alis");
/// `typeFileURL`
pub const TYPE_FILE_URL: TypeCode = TypeCode::from_bytes(*b"furl");
/// `typeFSRef`
pub const TYPE_FS_REF: TypeCode = TypeCode::from_bytes(*b"fsrf");
/// `typeFSS`
pub const TYPE_FSS: TypeCode = TypeCode::from_bytes(*b"fss ");
/// `typeUTF8Text`
pub const TYPE_UTF8_TEXT: TypeCode = TypeCode::from_bytes(*b"utf8");

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            for b in bytes {
                write!(f, "{}", b as char)?;
            }
            Ok(())
        } else {
            write!(f, "0x{:08x}", self.0)
        }
    }
}

impl fmt::Debug for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeCode('{}')", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_char_codes_render_as_text() {
        assert_eq!(TYPE_ALIAS.to_string(), "alis");
        assert_eq!(TYPE_FSS.to_string(), "fss ");
        assert_eq!(TYPE_FILE_URL.as_u32(), 0x6675_726c);
    }

    #[test]
    fn non_printable_codes_render_as_hex() {
        assert_eq!(TypeCode::new(1).to_string(), "0x00000001");
    }
}
