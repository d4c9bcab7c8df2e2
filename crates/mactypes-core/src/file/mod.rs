//! Alias and file URL wrappers.
//!
//! Both compare and hash by the descriptor they pack to: `(type, data)`.

mod alias;
mod file_url;

pub use alias::Alias;
pub use file_url::FileUrl;

use crate::descriptor::AeDesc;
use std::hash::{Hash, Hasher};

fn same_desc<D: AeDesc>(a: &D, b: &D) -> bool {
    a.type_code() == b.type_code() && a.data() == b.data()
}

fn hash_desc<D: AeDesc, H: Hasher>(desc: &D, state: &mut H) {
    desc.type_code().hash(state);
    desc.data().hash(state);
}

#[cfg(test)]
pub(crate) mod mock;
