//! Descriptor protocol consumed by the wrappers.
//!
//! The real Apple Event Manager binding lives outside this crate; anything that
//! can be built from `(type, data)` and coerced to another type plugs in through
//! [`AeDesc`]. [`PosixDesc`] is a portable implementation backed by the local
//! filesystem.

mod os_error;
mod posix;
mod type_code;

pub use os_error::{
    MacOsError, DIR_NF_ERR, ERR_AE_COERCION_FAIL, ERR_AE_EVENT_FAILED, ERR_AE_WRONG_DATA_TYPE,
    FNF_ERR, NSV_ERR, PARAM_ERR, PERM_ERR,
};
pub use posix::PosixDesc;
pub use type_code::{TypeCode, TYPE_ALIAS, TYPE_FILE_URL, TYPE_FSS, TYPE_FS_REF, TYPE_UTF8_TEXT};

/// An Apple Event descriptor: a type tag plus raw data, convertible to other
/// types by the OS.
pub trait AeDesc: Clone {
    /// Creates a descriptor holding `data` tagged as `type_code`.
    fn new(type_code: TypeCode, data: Vec<u8>) -> Self;

    fn type_code(&self) -> TypeCode;

    fn data(&self) -> &[u8];

    /// Asks the OS to convert this descriptor to `to`. Returns a new descriptor.
    fn coerce(&self, to: TypeCode) -> Result<Self, MacOsError>;
}
