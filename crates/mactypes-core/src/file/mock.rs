//! Scripted descriptor for wrapper tests.
//!
//! `furl` coerces to `alis` by prefixing the URL with `alias:`; `alis` coerces
//! back by stripping it. Every coercion is counted per thread, and a forced
//! failure code can be installed with [`fail_with`].

use crate::descriptor::{
    AeDesc, MacOsError, TypeCode, ERR_AE_COERCION_FAIL, TYPE_ALIAS, TYPE_FILE_URL,
};
use std::cell::Cell;

const ALIAS_PREFIX: &[u8] = b"alias:";

thread_local! {
    static COERCIONS: Cell<usize> = const { Cell::new(0) };
    static FAIL_CODE: Cell<Option<i32>> = const { Cell::new(None) };
}

pub(crate) fn coercions() -> usize {
    COERCIONS.with(Cell::get)
}

pub(crate) fn fail_with(code: Option<i32>) {
    FAIL_CODE.with(|c| c.set(code));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MockDesc {
    type_code: TypeCode,
    data: Vec<u8>,
}

impl MockDesc {
    pub(crate) fn alias_for_url(url: &str) -> Self {
        let mut data = ALIAS_PREFIX.to_vec();
        data.extend_from_slice(url.as_bytes());
        Self::new(TYPE_ALIAS, data)
    }
}

impl AeDesc for MockDesc {
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
        COERCIONS.with(|c| c.set(c.get() + 1));
        if let Some(code) = FAIL_CODE.with(Cell::get) {
            return Err(MacOsError::new(code));
        }
        match (self.type_code, to) {
            (from, to) if from == to => Ok(self.clone()),
            (TYPE_FILE_URL, TYPE_ALIAS) => {
                Ok(Self::alias_for_url(std::str::from_utf8(&self.data).unwrap()))
            }
            (TYPE_ALIAS, TYPE_FILE_URL) => Ok(Self::new(
                TYPE_FILE_URL,
                self.data[ALIAS_PREFIX.len()..].to_vec(),
            )),
            _ => Err(MacOsError::new(ERR_AE_COERCION_FAIL)),
        }
    }
}
