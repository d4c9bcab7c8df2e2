//! Native OS error carried by a failed coercion.

use std::fmt;

/// `nsvErr`: no such volume.
pub const NSV_ERR: i32 = -35;
/// `fnfErr`: file not found.
pub const FNF_ERR: i32 = -43;
/// `paramErr`: invalid parameter.
pub const PARAM_ERR: i32 = -50;
/// `permErr`: permission denied.
pub const PERM_ERR: i32 = -54;
/// `dirNFErr`: directory not found.
pub const DIR_NF_ERR: i32 = -120;
/// `errAECoercionFail`: data could not be coerced to the requested type.
pub const ERR_AE_COERCION_FAIL: i32 = -1700;
/// `errAEWrongDataType`
pub const ERR_AE_WRONG_DATA_TYPE: i32 = -1703;
/// `errAEEventFailed`
pub const ERR_AE_EVENT_FAILED: i32 = -1708;

/// Error raised by the native descriptor layer; wraps the raw OS status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacOsError {
    code: i32,
}

impl MacOsError {
    pub const fn new(code: i32) -> Self {
        Self { code }
    }

    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Short description for the codes this crate deals with.
    pub fn description(&self) -> Option<&'static str> {
        let s = match self.code {
            NSV_ERR => "no such volume",
            FNF_ERR => "file not found",
            PARAM_ERR => "error in user parameter list",
            PERM_ERR => "permissions error",
            DIR_NF_ERR => "directory not found",
            ERR_AE_COERCION_FAIL => "can't coerce the data to the requested type",
            ERR_AE_WRONG_DATA_TYPE => "wrong descriptor type",
            ERR_AE_EVENT_FAILED => "the Apple event was not handled",
            _ => return None,
        };
        Some(s)
    }
}

impl fmt::Display for MacOsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(d) => write!(f, "Mac OS error {} ({})", self.code, d),
            None => write!(f, "Mac OS error {}", self.code),
        }
    }
}

impl std::error::Error for MacOsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_has_description() {
        assert_eq!(
            MacOsError::new(-43).to_string(),
            "Mac OS error -43 (file not found)"
        );
    }

    #[test]
    fn unknown_code_renders_number_only() {
        assert_eq!(MacOsError::new(-9999).to_string(), "Mac OS error -9999");
        assert_eq!(MacOsError::new(-9999).description(), None);
    }
}
